mod layout;
pub use layout::{AppLayout, Guarded};

mod pages;
pub use pages::{Cart, Favorites, NotFound, Recipes, Subscriptions};

mod change_password;
pub use change_password::ChangePassword;

mod sign_in;
pub use sign_in::SignIn;
