pub mod capability;
pub mod launcher;
pub mod provisioner;
