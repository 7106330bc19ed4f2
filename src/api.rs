//! API group and per-group API tag determined by the request path prefix.
//!
//! `ApiGroup` is the coarse dispatch (which literal prefix matched);
//! `Api` is the finer tag recorded once the full path has been
//! recognized, matching the `EApiGroup`/`EAlpacaApi` split in the
//! reference implementation's later constants (the version in
//! `original_source` only implements the `/api/v1/` prefix; the
//! `/management/`, `/setup/`, `/` and `/asset/` prefixes are a
//! supplement grounded directly on spec.md's `ApiGroupPrefix` handler).

/// The coarse group a request path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiGroup {
    Unknown,
    ServerStatus,
    Device,
    Management,
    Setup,
    Asset,
}

impl Default for ApiGroup {
    fn default() -> Self {
        ApiGroup::Unknown
    }
}

/// The specific API within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Unknown,
    ServerStatus,
    DeviceApi,
    DeviceSetup,
    ManagementApiVersions,
    ManagementDescription,
    ManagementConfiguredDevices,
    ServerSetup,
    Asset,
}

impl Default for Api {
    fn default() -> Self {
        Api::Unknown
    }
}
