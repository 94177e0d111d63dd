mod landing;
pub use landing::Landing;

mod auth_page;
pub use auth_page::AuthPage;

mod app_layout;
pub use app_layout::AppLayout;

mod home;
pub use home::Home;

mod submit;
pub use submit::Submit;

mod profile;
pub use profile::ProfilePage;

mod not_found;
pub use not_found::NotFound;

mod redirect;
use redirect::use_signed_in_redirect;
