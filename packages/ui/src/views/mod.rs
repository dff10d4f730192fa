mod cart;
pub use cart::CartView;

mod change_password;
pub use change_password::{change_password, ChangePasswordView};

mod not_found;
pub use not_found::NotFoundView;

mod recipes;
pub use recipes::RecipesView;

mod sign_in;
pub use sign_in::SignInView;

mod subscriptions;
pub use subscriptions::SubscriptionsView;
