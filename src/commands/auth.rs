//! Per-command authorization.
use super::Invoker;
use serenity::model::id::{RoleId, UserId};
use serenity::model::permissions::Permissions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthLevel {
    Public,
    Role(RoleId),
    ManageMessages,
    Administrator,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    MissingRole,
    MissingPermission,
}

impl Denial {
    pub fn message(self) -> &'static str {
        match self {
            Denial::MissingRole => "You do not have the required role to use this command.",
            Denial::MissingPermission => "You do not have permission to use this command.",
        }
    }
}

pub fn authorize(level: AuthLevel, invoker: &Invoker) -> Result<(), Denial> {
    let allowed = match level {
        AuthLevel::Public => true,
        AuthLevel::Role(role) => invoker.roles.contains(&role),
        AuthLevel::ManageMessages => has_permission(invoker.permissions, Permissions::MANAGE_MESSAGES),
        AuthLevel::Administrator => has_permission(invoker.permissions, Permissions::ADMINISTRATOR),
    };
    match (allowed, level) {
        (true, _) => Ok(()),
        (false, AuthLevel::Role(_)) => Err(Denial::MissingRole),
        (false, _) => Err(Denial::MissingPermission),
    }
}

fn has_permission(granted: Permissions, wanted: Permissions) -> bool {
    granted.contains(Permissions::ADMINISTRATOR) || granted.contains(wanted)
}

/// Guild-level permissions of a member: the owner gets everything, everyone
/// else the union of `@everyone` and their roles. Channel overwrites are not
/// applied.
pub fn base_permissions(
    owner_id: UserId,
    user_id: UserId,
    everyone: Permissions,
    member_roles: impl IntoIterator<Item = Permissions>,
) -> Permissions {
    if user_id == owner_id {
        return Permissions::all();
    }
    let granted = member_roles.into_iter().fold(everyone, |acc, p| acc | p);
    if granted.contains(Permissions::ADMINISTRATOR) {
        Permissions::all()
    } else {
        granted
    }
}
