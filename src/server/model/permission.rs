//! Permission capability model.
//!
//! Permissions are (resource, action) capability grants carried by user groups.
//! A user's effective capabilities are the union of every grant across all
//! groups they belong to, resolved into a `PermissionSet`. The set is computed
//! fresh on every authenticated request so that group membership changes take
//! effect immediately, and attached to the request's auth context.

use std::collections::{BTreeSet, HashMap};

use crate::{
    model::user_group::PermissionDto,
    server::{error::AppError, model::user_group::UserGroup},
};

/// A protected resource class in the permission model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Car,
    ParkingSpot,
    ParkingLot,
    User,
    UserGroup,
    ParkingRequest,
    Payment,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Car,
        Resource::ParkingSpot,
        Resource::ParkingLot,
        Resource::User,
        Resource::UserGroup,
        Resource::ParkingRequest,
        Resource::Payment,
    ];

    /// The resource name as it appears on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Car => "car",
            Resource::ParkingSpot => "parkingSpot",
            Resource::ParkingLot => "parkingLot",
            Resource::User => "user",
            Resource::UserGroup => "userGroup",
            Resource::ParkingRequest => "parkingRequest",
            Resource::Payment => "payment",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == value)
    }
}

/// An action that can be granted on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == value)
    }
}

/// One permission grant held by a user group: a resource and the subset of
/// actions allowed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGrant {
    pub resource: Resource,
    pub actions: BTreeSet<Action>,
}

impl PermissionGrant {
    /// Grant of all four actions on a resource.
    pub fn full(resource: Resource) -> Self {
        Self {
            resource,
            actions: Action::ALL.into_iter().collect(),
        }
    }

    /// Validates and converts a client-submitted permission grant.
    ///
    /// # Arguments
    /// - `dto` - The permission payload from a group create/update request
    ///
    /// # Returns
    /// - `Ok(PermissionGrant)` - Resource and all actions are known names
    /// - `Err(AppError::BadRequest)` - Unknown resource or action name
    pub fn from_dto(dto: &PermissionDto) -> Result<Self, AppError> {
        let resource = Resource::parse(&dto.resource)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown resource: {}", dto.resource)))?;

        let actions = dto
            .actions
            .iter()
            .map(|name| {
                Action::parse(name)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown action: {name}")))
            })
            .collect::<Result<BTreeSet<Action>, AppError>>()?;

        Ok(Self { resource, actions })
    }

    /// Converts a stored permission row into a grant at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The permission row loaded from the database
    ///
    /// # Returns
    /// - `Ok(PermissionGrant)` - The converted grant
    /// - `Err(AppError::InternalError)` - The stored resource name is not a
    ///   known resource
    pub fn from_entity(entity: entity::user_group_permission::Model) -> Result<Self, AppError> {
        let resource = Resource::parse(&entity.resource).ok_or_else(|| {
            AppError::InternalError(format!("Unknown stored resource: {}", entity.resource))
        })?;

        let mut actions = BTreeSet::new();
        if entity.can_create {
            actions.insert(Action::Create);
        }
        if entity.can_read {
            actions.insert(Action::Read);
        }
        if entity.can_update {
            actions.insert(Action::Update);
        }
        if entity.can_delete {
            actions.insert(Action::Delete);
        }

        Ok(Self { resource, actions })
    }

    pub fn to_dto(&self) -> PermissionDto {
        PermissionDto {
            resource: self.resource.as_str().to_string(),
            actions: self.actions.iter().map(|a| a.as_str().to_string()).collect(),
        }
    }
}

/// Flattened capability set resolved from a user's group memberships.
///
/// Maps each resource to the union of all actions granted by any group the
/// subject belongs to. Duplicate grants across groups collapse; a subject in
/// zero groups resolves to the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    grants: HashMap<Resource, BTreeSet<Action>>,
}

impl PermissionSet {
    /// Resolves the capability set for a subject belonging to the given groups.
    ///
    /// Pure set union over every (resource, actions) grant of every group.
    /// Inactive groups are expected to be filtered out by the caller before
    /// resolution.
    ///
    /// # Arguments
    /// - `groups` - The groups the subject belongs to, with permissions loaded
    ///
    /// # Returns
    /// - `PermissionSet` - Union of all grants; empty for an empty group list
    pub fn resolve(groups: &[UserGroup]) -> Self {
        let mut grants: HashMap<Resource, BTreeSet<Action>> = HashMap::new();

        for group in groups {
            for grant in &group.permissions {
                grants
                    .entry(grant.resource)
                    .or_default()
                    .extend(grant.actions.iter().copied());
            }
        }

        Self { grants }
    }

    /// Checks whether the set grants `action` on `resource`.
    pub fn allows(&self, resource: Resource, action: Action) -> bool {
        self.grants
            .get(&resource)
            .is_some_and(|actions| actions.contains(&action))
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Converts the set to the wire representation: resource name to a sorted
    /// list of action names.
    pub fn to_dto(&self) -> HashMap<String, Vec<String>> {
        self.grants
            .iter()
            .map(|(resource, actions)| {
                (
                    resource.as_str().to_string(),
                    actions.iter().map(|a| a.as_str().to_string()).collect(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::*;

    fn group(permissions: Vec<PermissionGrant>) -> UserGroup {
        UserGroup {
            id: 1,
            name: "Test Group".to_string(),
            description: None,
            permissions,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn grant(resource: Resource, actions: &[Action]) -> PermissionGrant {
        PermissionGrant {
            resource,
            actions: actions.iter().copied().collect(),
        }
    }

    #[test]
    fn resolves_empty_set_for_no_groups() {
        let set = PermissionSet::resolve(&[]);

        assert!(set.is_empty());
        assert!(!set.allows(Resource::Car, Action::Read));
    }

    #[test]
    fn resolves_union_across_groups() {
        let residents = group(vec![grant(Resource::Car, &[Action::Read, Action::Create])]);
        let managers = group(vec![
            grant(Resource::Car, &[Action::Update, Action::Delete]),
            grant(Resource::ParkingLot, &[Action::Read]),
        ]);

        let set = PermissionSet::resolve(&[residents, managers]);

        for action in Action::ALL {
            assert!(set.allows(Resource::Car, action));
        }
        assert!(set.allows(Resource::ParkingLot, Action::Read));
        assert!(!set.allows(Resource::ParkingLot, Action::Update));
        assert!(!set.allows(Resource::Payment, Action::Read));
    }

    #[test]
    fn collapses_duplicate_grants() {
        let a = group(vec![grant(Resource::Payment, &[Action::Read])]);
        let b = group(vec![grant(Resource::Payment, &[Action::Read])]);

        let set = PermissionSet::resolve(&[a, b]);

        let dto = set.to_dto();
        assert_eq!(dto["payment"], vec!["read"]);
    }

    #[test]
    fn dto_lists_actions_sorted_and_deduplicated() {
        let g = group(vec![grant(
            Resource::UserGroup,
            &[Action::Delete, Action::Create, Action::Read],
        )]);

        let set = PermissionSet::resolve(&[g]);

        let dto = set.to_dto();
        assert_eq!(dto["userGroup"], vec!["create", "read", "delete"]);
    }

    #[test]
    fn rejects_unknown_names_in_dto() {
        let bad_resource = PermissionDto {
            resource: "spaceship".to_string(),
            actions: vec!["read".to_string()],
        };
        assert!(PermissionGrant::from_dto(&bad_resource).is_err());

        let bad_action = PermissionDto {
            resource: "car".to_string(),
            actions: vec!["read".to_string(), "fly".to_string()],
        };
        assert!(PermissionGrant::from_dto(&bad_action).is_err());
    }

    #[test]
    fn converts_permission_row_flags_to_actions() {
        let row = entity::user_group_permission::Model {
            id: 1,
            group_id: 1,
            resource: "parkingLot".to_string(),
            can_create: false,
            can_read: true,
            can_update: true,
            can_delete: false,
        };

        let grant = PermissionGrant::from_entity(row).unwrap();

        assert_eq!(grant.resource, Resource::ParkingLot);
        assert_eq!(
            grant.actions,
            BTreeSet::from([Action::Read, Action::Update])
        );
    }

    #[test]
    fn parses_wire_names_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::parse(resource.as_str()), Some(resource));
        }
        for action in Action::ALL {
            assert_eq!(Action::parse(action.as_str()), Some(action));
        }
        assert_eq!(Resource::parse("spaceship"), None);
        assert_eq!(Action::parse("fly"), None);
    }
}
