//! Owner and group name resolution

use std::collections::HashMap;

use nix::unistd::{Gid, Group, Uid, User};

/// Maps numeric owner/group ids to display names.
///
/// Resolution never fails: an id without a name mapping renders as its
/// decimal value.
pub trait IdResolver {
    fn user_name(&mut self, uid: u32) -> String;
    fn group_name(&mut self, gid: u32) -> String;
}

/// Resolves ids through the system user and group databases.
///
/// Lookups are cached for the lifetime of the resolver, so one run always
/// shows the same name for the same id.
#[derive(Debug, Default)]
pub struct SystemIdResolver {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl SystemIdResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdResolver for SystemIdResolver {
    fn user_name(&mut self, uid: u32) -> String {
        self.users
            .entry(uid)
            .or_insert_with(|| match User::from_uid(Uid::from_raw(uid)) {
                Ok(Some(user)) => user.name,
                _ => uid.to_string(),
            })
            .clone()
    }

    fn group_name(&mut self, gid: u32) -> String {
        self.groups
            .entry(gid)
            .or_insert_with(|| match Group::from_gid(Gid::from_raw(gid)) {
                Ok(Some(group)) => group.name,
                _ => gid.to_string(),
            })
            .clone()
    }
}

/// Always renders ids numerically (`-n`).
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericIdResolver;

impl IdResolver for NumericIdResolver {
    fn user_name(&mut self, uid: u32) -> String {
        uid.to_string()
    }

    fn group_name(&mut self, gid: u32) -> String {
        gid.to_string()
    }
}
