//! Device types and ASCOM method names recognized under `/api/v1/` and
//! `/setup/v1/`.

use crate::token;

/// The ASCOM Alpaca device types this decoder recognizes. Matched
/// case-sensitively (all-lowercase) against the path segment following
/// the API prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Unknown,
    Camera,
    CoverCalibrator,
    Dome,
    FilterWheel,
    Focuser,
    ObservingConditions,
    Rotator,
    SafetyMonitor,
    Switch,
    Telescope,
}

impl Default for DeviceType {
    fn default() -> Self {
        DeviceType::Unknown
    }
}

const DEVICE_TYPES: &[(&[u8], DeviceType)] = &[
    (b"camera", DeviceType::Camera),
    (b"covercalibrator", DeviceType::CoverCalibrator),
    (b"dome", DeviceType::Dome),
    (b"filterwheel", DeviceType::FilterWheel),
    (b"focuser", DeviceType::Focuser),
    (b"observingconditions", DeviceType::ObservingConditions),
    (b"rotator", DeviceType::Rotator),
    (b"safetymonitor", DeviceType::SafetyMonitor),
    (b"switch", DeviceType::Switch),
    (b"telescope", DeviceType::Telescope),
];

pub fn match_device_type(name: &[u8]) -> DeviceType {
    token::match_exact(name, DEVICE_TYPES, DeviceType::Unknown)
}

/// The terminal path segment of a device or setup request: either one of
/// the ASCOM common/device-specific method names, or `Setup` for the
/// `/setup/v1/.../setup` per-device configuration page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMethod {
    Unknown,

    // ASCOM common methods, supported by every device type.
    Connected,
    Description,
    DriverInfo,
    DriverVersion,
    InterfaceVersion,
    Name,
    SupportedActions,

    // Per-device setup page, reached via /setup/v1/<type>/<n>/setup.
    Setup,

    // ObservingConditions methods.
    AveragePeriod,
    CloudCover,
    DewPoint,
    Humidity,
    Pressure,
    RainRate,
    Refresh,
    Temperature,
    SensorDescription,

    // SafetyMonitor methods.
    IsSafe,

    // Switch methods.
    GetSwitchValue,
    SetSwitch,
    SetSwitchValue,
}

impl Default for DeviceMethod {
    fn default() -> Self {
        DeviceMethod::Unknown
    }
}

const DEVICE_METHODS: &[(&[u8], DeviceMethod)] = &[
    (b"connected", DeviceMethod::Connected),
    (b"description", DeviceMethod::Description),
    (b"driverinfo", DeviceMethod::DriverInfo),
    (b"driverversion", DeviceMethod::DriverVersion),
    (b"interfaceversion", DeviceMethod::InterfaceVersion),
    (b"name", DeviceMethod::Name),
    (b"supportedactions", DeviceMethod::SupportedActions),
    (b"setup", DeviceMethod::Setup),
    (b"averageperiod", DeviceMethod::AveragePeriod),
    (b"cloudcover", DeviceMethod::CloudCover),
    (b"dewpoint", DeviceMethod::DewPoint),
    (b"humidity", DeviceMethod::Humidity),
    (b"pressure", DeviceMethod::Pressure),
    (b"rainrate", DeviceMethod::RainRate),
    (b"refresh", DeviceMethod::Refresh),
    (b"temperature", DeviceMethod::Temperature),
    (b"sensordescription", DeviceMethod::SensorDescription),
    (b"issafe", DeviceMethod::IsSafe),
    (b"getswitchvalue", DeviceMethod::GetSwitchValue),
    (b"setswitch", DeviceMethod::SetSwitch),
    (b"setswitchvalue", DeviceMethod::SetSwitchValue),
];

pub fn match_device_method(name: &[u8]) -> DeviceMethod {
    token::match_exact(name, DEVICE_METHODS, DeviceMethod::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_device_types() {
        assert_eq!(match_device_type(b"safetymonitor"), DeviceType::SafetyMonitor);
        assert_eq!(match_device_type(b"switch"), DeviceType::Switch);
        assert_eq!(match_device_type(b"Camera"), DeviceType::Unknown);
        assert_eq!(match_device_type(b"bogus"), DeviceType::Unknown);
    }

    #[test]
    fn recognizes_device_methods() {
        assert_eq!(match_device_method(b"issafe"), DeviceMethod::IsSafe);
        assert_eq!(match_device_method(b"refresh"), DeviceMethod::Refresh);
        assert_eq!(match_device_method(b"setup"), DeviceMethod::Setup);
        assert_eq!(match_device_method(b"frobnicate"), DeviceMethod::Unknown);
    }
}
