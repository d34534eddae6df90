pub mod model;
pub mod repository;

pub use model::MemberDB;
pub use repository::MemberRepository;
