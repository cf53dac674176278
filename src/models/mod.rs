pub mod booking;
pub mod location;
pub mod movie;
pub mod seat;
pub mod showtime;
pub mod user;

pub use booking::Booking;
pub use location::Location;
pub use movie::Movie;
pub use seat::{Seat, SeatCategory};
pub use showtime::Showtime;
pub use user::User;
