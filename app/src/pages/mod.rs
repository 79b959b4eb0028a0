//! Pages.

mod cart;
mod dashboard;
mod not_found;
mod product_detail;
mod products;

pub use cart::CartPage;
pub use dashboard::DashboardPage;
pub use not_found::NotFound;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
