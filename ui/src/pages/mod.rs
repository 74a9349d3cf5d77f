pub mod about;
pub mod announcements;
pub mod home;
pub mod import_preview;
pub mod login;
pub mod not_found;
pub mod properties;
pub mod property_detail;
pub mod ranking;
pub mod sign_up;

pub use about::AboutPage;
pub use announcements::AnnouncementsPage;
pub use home::HomePage;
pub use import_preview::ImportPreviewPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use properties::PropertiesPage;
pub use property_detail::PropertyDetailPage;
pub use ranking::RankingPage;
pub use sign_up::SignUpPage;
