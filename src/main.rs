use std::process::ExitCode;

use input_detect::{Detection, DetectorConfig, InputBoxDetector};
use serde_json::json;

mod args;
use args::{Args, Mode};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = Args::parse() else {
        return ExitCode::SUCCESS;
    };

    let image = match image::open(&args.image_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("❌ Could not load image {:?}: {e}", args.image_path);
            return ExitCode::FAILURE;
        }
    };

    let mut config = DetectorConfig::default().with_debug(args.debug);
    if let Some(paths) = args.template_paths.clone() {
        config = config.with_template_paths(paths);
    }
    if let Some(threshold) = args.threshold {
        config = config.with_match_threshold(threshold);
    }
    if let Some(policy) = args.search_policy {
        config = config.with_search_policy(policy);
    }
    if let Some(dir) = args.debug_dir.clone() {
        config = config.with_debug_dir(dir);
    }

    let detector = match build_detector(config, &args) {
        Ok(detector) => detector,
        Err(message) => {
            eprintln!("❌ {message}");
            return ExitCode::FAILURE;
        }
    };

    match args.mode {
        Mode::TemplateMatch => report(detector.find_input_box(&image), args.json),
        Mode::Placeholder => report(detector.find_input_box_by_placeholder(&image), args.json),
        Mode::Arrow(direction) => report_arrow(detector.find_arrow_icon(&image, direction), args.json),
    }
}

#[cfg(feature = "ocr-tesseract")]
fn build_detector(config: DetectorConfig, args: &Args) -> Result<InputBoxDetector, String> {
    use input_detect::detect::ocr::TesseractExtractor;

    let language = args.ocr_language.as_deref().unwrap_or("eng");
    Ok(InputBoxDetector::new(config)
        .with_text_extractor(Box::new(TesseractExtractor::with_language(language))))
}

#[cfg(not(feature = "ocr-tesseract"))]
fn build_detector(config: DetectorConfig, args: &Args) -> Result<InputBoxDetector, String> {
    if args.mode == Mode::Placeholder {
        return Err(
            "Placeholder detection needs an OCR engine; rebuild with --features ocr-tesseract"
                .to_string(),
        );
    }
    Ok(InputBoxDetector::new(config))
}

fn report(detection: Detection, as_json: bool) -> ExitCode {
    if as_json {
        let payload = match &detection {
            Detection::Found(input_box) => json!({ "found": true, "input_box": input_box }),
            Detection::NotFound => json!({ "found": false }),
            Detection::Failed(reason) => json!({ "found": false, "error": reason }),
        };
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        return match detection {
            Detection::Found(_) => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        };
    }

    match detection {
        Detection::Found(input_box) => {
            println!("✅ Detected input box:");
            println!("   Position: ({}, {})", input_box.x, input_box.y);
            println!("   Size: {}x{}", input_box.width, input_box.height);
            println!(
                "   Text: '{}' (confidence {:.3})",
                input_box.text, input_box.confidence
            );
            println!(
                "   Click position: ({}, {})",
                input_box.click_position.0, input_box.click_position.1
            );
            ExitCode::SUCCESS
        }
        Detection::NotFound => {
            println!("❌ No input box detected");
            ExitCode::FAILURE
        }
        Detection::Failed(reason) => {
            println!("❌ No input box detected ({reason})");
            ExitCode::FAILURE
        }
    }
}

fn report_arrow(found: Option<(u32, u32)>, as_json: bool) -> ExitCode {
    if as_json {
        let payload = match found {
            Some((x, y)) => json!({ "found": true, "x": x, "y": y }),
            None => json!({ "found": false }),
        };
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        return if found.is_some() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match found {
        Some((x, y)) => {
            println!("✅ Arrow icon at ({x}, {y})");
            ExitCode::SUCCESS
        }
        None => {
            println!("❌ No arrow icon found");
            ExitCode::FAILURE
        }
    }
}
