pub mod athlete;
pub mod company;
pub mod user;

pub use athlete::{Athlete, AthleteWithCompany};
pub use company::{Company, CompanyWithAthletes};
pub use user::{User, UserInfo};
