pub mod about;
pub mod auctions;
pub mod calculator;
pub mod contact;
pub mod faq;
pub mod home;
pub mod how_it_works;
pub mod not_found;
pub mod services;
pub mod testimonials;

pub use about::AboutPage;
pub use auctions::AuctionsPage;
pub use calculator::CalculatorPage;
pub use contact::ContactPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;
pub use testimonials::TestimonialsPage;
