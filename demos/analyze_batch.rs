//! Example: Analyze every WAV file in a directory in parallel
//!
//! Usage: cargo run --example analyze_batch -- path/to/dir

use rayon::prelude::*;

use lyrebird_dsp::{analyze_audio, AnalysisConfig, AnalysisError, AnalysisResult};

/// Load a WAV file as mono samples and a sample rate
fn load_wav(path: &std::path::Path) -> Result<(Vec<f32>, u32), AnalysisError> {
    let mut reader = hound::WavReader::open(path).map_err(|e| {
        AnalysisError::BufferCreation(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AnalysisError::InvalidAudioData(e.to_string()))?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| AnalysisError::InvalidAudioData(e.to_string()))?
        }
    };

    let channels = spec.channels as usize;
    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok((mono, spec.sample_rate))
}

fn analyze_path(path: &std::path::Path) -> Result<AnalysisResult, AnalysisError> {
    let (samples, sample_rate) = load_wav(path)?;
    analyze_audio(&samples, sample_rate, AnalysisConfig::default())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dir = std::env::args()
        .nth(1)
        .ok_or("Usage: analyze_batch <directory>")?;

    let mut paths: Vec<std::path::PathBuf> = std::fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("wav"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(format!("No WAV files found in {}", dir).into());
    }

    println!("Analyzing {} files...", paths.len());

    let results: Vec<(std::path::PathBuf, Result<AnalysisResult, AnalysisError>)> = paths
        .par_iter()
        .map(|path| (path.clone(), analyze_path(path)))
        .collect();

    for (path, outcome) in &results {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match outcome {
            Ok(result) => println!(
                "  {:<40} {:>6.1} BPM (conf {:.2})  {} {:?}",
                name,
                result.bpm,
                result.confidence,
                result.key.name(),
                result.scale
            ),
            Err(e) => println!("  {:<40} FAILED: {}", name, e),
        }
    }

    let failures = results.iter().filter(|(_, r)| r.is_err()).count();
    println!("Done: {} analyzed, {} failed", results.len() - failures, failures);

    Ok(())
}
