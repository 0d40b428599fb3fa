pub use super::car::Entity as Car;
pub use super::notification::Entity as Notification;
pub use super::parking_history::Entity as ParkingHistory;
pub use super::parking_lot::Entity as ParkingLot;
pub use super::parking_request::Entity as ParkingRequest;
pub use super::parking_spot::Entity as ParkingSpot;
pub use super::payment::Entity as Payment;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
pub use super::user_group_member::Entity as UserGroupMember;
pub use super::user_group_permission::Entity as UserGroupPermission;
