pub mod athlete;
pub mod company;
pub mod user;

pub use athlete::AthleteRepository;
pub use company::CompanyRepository;
pub use user::UserRepository;
