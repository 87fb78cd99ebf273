//! Error types for psim.
//!
//! The numeric kernels never fail; errors come from configuration validation
//! and from bringing up the window and GPU.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// A parameter set that cannot produce a meaningful simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Particle or body count is zero.
    EmptyPopulation,
    /// Grid width or height is zero.
    EmptyGrid,
    /// A parameter that must be strictly positive is not.
    NotPositive { name: &'static str, value: f64 },
    /// A parameter that must be non-negative is negative.
    Negative { name: &'static str, value: f64 },
    /// A `[min, max)` range with `min >= max`.
    EmptyRange { name: &'static str, min: f64, max: f64 },
    /// Zero integration sub-steps per frame.
    NoSubsteps,
    /// Replacement particles do not match the fixed population size.
    PopulationMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPopulation => write!(f, "Particle count must be at least 1"),
            ConfigError::EmptyGrid => write!(f, "Field grid must have non-zero width and height"),
            ConfigError::NotPositive { name, value } => {
                write!(f, "`{}` must be positive, got {}", name, value)
            }
            ConfigError::Negative { name, value } => {
                write!(f, "`{}` must not be negative, got {}", name, value)
            }
            ConfigError::EmptyRange { name, min, max } => {
                write!(f, "`{}` range is empty: [{}, {})", name, min, max)
            }
            ConfigError::NoSubsteps => write!(f, "At least one integration sub-step per frame is required"),
            ConfigError::PopulationMismatch { expected, actual } => {
                write!(f, "Expected {} particles, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur when running a simulation.
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Simulation parameters were rejected.
    Config(ConfigError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            SimulationError::Window(e) => write!(f, "Failed to create window: {}", e),
            SimulationError::Gpu(e) => write!(f, "GPU error: {}", e),
            SimulationError::Config(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::EventLoop(e) => Some(e),
            SimulationError::Window(e) => Some(e),
            SimulationError::Gpu(e) => Some(e),
            SimulationError::Config(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SimulationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SimulationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SimulationError {
    fn from(e: winit::error::OsError) -> Self {
        SimulationError::Window(e)
    }
}

impl From<GpuError> for SimulationError {
    fn from(e: GpuError) -> Self {
        SimulationError::Gpu(e)
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::EmptyRange { name: "radius", min: 5.0, max: 1.0 };
        assert_eq!(err.to_string(), "`radius` range is empty: [5, 1)");

        let err = ConfigError::NotPositive { name: "dt", value: 0.0 };
        assert!(err.to_string().contains("dt"));
    }

    #[test]
    fn test_simulation_error_wraps_config() {
        let err: SimulationError = ConfigError::NoSubsteps.into();
        assert!(err.to_string().starts_with("Invalid configuration"));
        assert!(err.source().is_some());
    }
}
