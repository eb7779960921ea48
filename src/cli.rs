// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::CameraKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "camera-rig")]
#[command(about = "Camera and transform playground", long_about = None)]
pub struct Cli {
    /// JSON scene config; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Camera variant, overrides the config file
    #[arg(long, value_enum)]
    pub camera: Option<CameraKind>,

    /// Run a fixed-step simulation without opening a window
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Seconds per headless frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Suppress per-frame output
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["camera-rig"]);
        assert!(!cli.headless);
        assert_eq!(cli.frames, 120);
        assert!(cli.camera.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_camera_value_names() {
        let cli = Cli::parse_from(["camera-rig", "--camera", "first-person", "--headless"]);
        assert_eq!(cli.camera, Some(CameraKind::FirstPerson));
        assert!(cli.headless);
    }
}
