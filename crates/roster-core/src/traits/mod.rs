//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    GameRepository, MemberRepository, PreferenceRepository, RepoResult, SettingsRepository,
    StoreHealth, UserRepository,
};
