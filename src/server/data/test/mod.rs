mod car;
mod notification;
mod parking_lot;
mod parking_request;
mod parking_spot;
mod payment;
mod user;
mod user_group;
