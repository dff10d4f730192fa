//! Presentational components shared by the views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label};

mod layout;
pub use layout::{Container, Main, MetaTags, PageStatus, Title};

mod pagination;
pub use pagination::Pagination;

mod purchase_list;
pub use purchase_list::PurchaseList;

mod recipe_card;
pub use recipe_card::RecipeCard;

mod subscription_list;
pub use subscription_list::SubscriptionList;
