pub mod prelude;

pub mod car;
pub mod notification;
pub mod parking_history;
pub mod parking_lot;
pub mod parking_request;
pub mod parking_spot;
pub mod payment;
pub mod user;
pub mod user_group;
pub mod user_group_member;
pub mod user_group_permission;
