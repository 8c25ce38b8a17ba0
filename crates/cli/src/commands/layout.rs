//! Print a built-in layout as YAML or JSON

use anyhow::Result;
use padtouch_router::Preset;

use crate::commands::{FormatArg, LayoutArgs};
use crate::error::CliError;

pub fn execute(args: &LayoutArgs) -> Result<()> {
    print!("{}", render(args)?);
    Ok(())
}

fn render(args: &LayoutArgs) -> Result<String, CliError> {
    if args.screen.width <= 0 || args.screen.height <= 0 {
        return Err(CliError::InvalidArguments(format!(
            "screen size must be positive, got {}x{}",
            args.screen.width, args.screen.height
        )));
    }
    let preset: Preset = args.preset.parse()?;
    let layout = preset.layout(args.console.into(), args.screen.width, args.screen.height);
    layout.validate()?;

    let mut text = match args.format {
        FormatArg::Yaml => layout.to_yaml()?,
        FormatArg::Json => layout.to_json()?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ConsoleArg, ScreenArgs};
    use padtouch_hid_gadget_protocol::ConsoleKind;
    use padtouch_router::LayoutConfig;

    fn args(format: FormatArg) -> LayoutArgs {
        LayoutArgs {
            preset: "project-diva".to_string(),
            console: ConsoleArg::Ps4,
            screen: ScreenArgs {
                width: 1280,
                height: 720,
            },
            format,
        }
    }

    #[test]
    fn test_render_json_parses_back() -> Result<(), Box<dyn std::error::Error>> {
        let text = render(&args(FormatArg::Json))?;
        let layout = LayoutConfig::from_json_str(&text)?;
        assert_eq!(layout.console, ConsoleKind::DualShock4);
        assert_eq!(layout.areas.len(), 3);
        Ok(())
    }

    #[test]
    fn test_unknown_preset() {
        let mut args = args(FormatArg::Yaml);
        args.preset = "pinball".to_string();
        assert!(matches!(render(&args), Err(CliError::Layout(_))));
    }

    #[test]
    fn test_rejects_empty_screen() {
        let mut args = args(FormatArg::Yaml);
        args.screen.height = 0;
        assert!(matches!(render(&args), Err(CliError::InvalidArguments(_))));
    }
}
