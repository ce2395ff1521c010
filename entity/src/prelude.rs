pub use super::datacenter::Entity as Datacenter;
pub use super::server::Entity as Server;
pub use super::switch::Entity as Switch;
pub use super::switch_to_server::Entity as SwitchToServer;
