use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_group_permission::Entity")]
    UserGroupPermission,
    #[sea_orm(has_many = "super::user_group_member::Entity")]
    UserGroupMember,
}

impl Related<super::user_group_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGroupPermission.def()
    }
}

impl Related<super::user_group_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGroupMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
