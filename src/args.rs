use std::env;
use std::path::PathBuf;

use input_detect::{ArrowDirection, SearchPolicy};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    TemplateMatch,
    Placeholder,
    Arrow(ArrowDirection),
}

#[derive(Debug)]
pub struct Args {
    pub image_path: PathBuf,
    pub mode: Mode,
    pub template_paths: Option<Vec<PathBuf>>,
    pub threshold: Option<f32>,
    pub search_policy: Option<SearchPolicy>,
    pub ocr_language: Option<String>,
    pub debug: bool,
    pub debug_dir: Option<PathBuf>,
    pub json: bool,
}

impl Args {
    pub fn parse() -> Option<Self> {
        let args: Vec<String> = env::args().collect();

        let mut image_path: Option<PathBuf> = None;
        let mut mode = Mode::TemplateMatch;
        let mut template_paths: Option<Vec<PathBuf>> = None;
        let mut threshold: Option<f32> = None;
        let mut search_policy: Option<SearchPolicy> = None;
        let mut ocr_language: Option<String> = None;
        let mut debug = false;
        let mut debug_dir: Option<PathBuf> = None;
        let mut json = false;

        for arg in args.iter().skip(1) {
            if arg == "--help" || arg == "-h" {
                print_help();
                return None;
            } else if arg == "--version" || arg == "-v" {
                println!("Input Detect v{}", env!("APP_VERSION_DISPLAY"));
                return None;
            } else if arg == "--placeholder" {
                mode = Mode::Placeholder;
            } else if let Some(val) = arg.strip_prefix("--arrow=") {
                mode = match val {
                    "up" => Mode::Arrow(ArrowDirection::Up),
                    "down" => Mode::Arrow(ArrowDirection::Down),
                    other => {
                        eprintln!("❌ Invalid arrow direction '{}', expected 'up' or 'down'", other);
                        return None;
                    }
                };
            } else if let Some(val) = arg.strip_prefix("--templates=") {
                template_paths = Some(val.split(',').map(PathBuf::from).collect());
            } else if let Some(val) = arg.strip_prefix("--threshold=") {
                match val.parse::<f32>() {
                    Ok(t) => threshold = Some(t),
                    Err(_) => {
                        eprintln!("❌ Invalid threshold value: {}", val);
                        return None;
                    }
                }
            } else if let Some(val) = arg.strip_prefix("--search=") {
                search_policy = match val {
                    "right-half" => Some(SearchPolicy::RightHalf),
                    "full" => Some(SearchPolicy::FullFrame),
                    other => {
                        eprintln!(
                            "❌ Unknown search policy '{}', expected 'right-half' or 'full'",
                            other
                        );
                        return None;
                    }
                };
            } else if let Some(val) = arg.strip_prefix("--lang=") {
                ocr_language = Some(val.to_string());
            } else if arg == "--debug" {
                debug = true;
            } else if let Some(val) = arg.strip_prefix("--debug-dir=") {
                debug_dir = Some(PathBuf::from(val));
            } else if arg == "--json" {
                json = true;
            } else if arg.starts_with('-') {
                eprintln!("❌ Unknown argument: {}", arg);
                print_help();
                return None;
            } else if image_path.is_none() {
                image_path = Some(PathBuf::from(arg));
            } else {
                eprintln!("❌ Unexpected extra argument: {}", arg);
                return None;
            }
        }

        let Some(image_path) = image_path else {
            eprintln!("❌ Missing image path");
            print_help();
            return None;
        };

        Some(Args {
            image_path,
            mode,
            template_paths,
            threshold,
            search_policy,
            ocr_language,
            debug,
            debug_dir,
            json,
        })
    }
}

fn print_help() {
    println!("🔍 Input Box Detector");
    println!();
    println!("USAGE:");
    println!("    input-detect <IMAGE> [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)            Template-match detection (right half of the image)");
    println!("    --placeholder         Placeholder-text detection (needs the ocr-tesseract feature)");
    println!("    --arrow=<up|down>     Locate the arrow/send icon instead of the input box");
    println!("    --templates=<p1,p2>   Comma-separated template image paths");
    println!("    --threshold=<f>       Match acceptance threshold (default: 0.6, strict)");
    println!("    --search=<right-half|full>  Where template matching looks (default: right-half)");
    println!("    --lang=<code>         OCR language for --placeholder (default: eng)");
    println!("    --debug               Save stage images while detecting");
    println!("    --debug-dir=<dir>     Where debug images go (default: debug_screenshots)");
    println!("    --json                Print the result as JSON");
    println!("    --help, -h            Show this help message");
    println!("    --version, -v         Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    input-detect screenshot.png");
    println!("    input-detect screenshot.png --placeholder --debug");
    println!("    input-detect screenshot.png --templates=a.png,b.png --threshold=0.7 --json");
    println!("    input-detect screenshot.png --arrow=up");
}
