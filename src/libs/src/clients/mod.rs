pub use device::{ApiClient, ApiSettings, DeviceNotes, RemoteError};

pub mod device;
