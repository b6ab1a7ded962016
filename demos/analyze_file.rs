//! Example: Analyze a single WAV file
//!
//! Decoding lives here, not in the library: the engine is sample-based and
//! expects whatever decoder the application uses to hand it mono floats.
//!
//! Usage: cargo run --example analyze_file -- path/to/track.wav

use lyrebird_dsp::{analyze_audio, AnalysisConfig, AnalysisError};

/// Load a WAV file as mono samples and a sample rate
fn load_wav(path: &str) -> Result<(Vec<f32>, u32), AnalysisError> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| AnalysisError::BufferCreation(format!("Failed to open {}: {}", path, e)))?;
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

    // Mix interleaved channels down to mono
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("Usage: analyze_file <track.wav>")?;

    let (samples, sample_rate) = load_wav(&path)?;
    let result = analyze_audio(&samples, sample_rate, AnalysisConfig::default())?;

    println!("Analysis Results:");
    println!("  BPM: {:.1} (confidence: {:.2})", result.bpm, result.confidence);
    println!("  Key: {} {:?}", result.key.name(), result.scale);
    print!("  Chords:");
    for chord in &result.chords {
        print!(" {}", chord.name());
    }
    println!();
    println!("  Duration: {:.2} s", result.metadata.duration_seconds);
    println!("  Processing time: {:.2} ms", result.metadata.processing_time_ms);

    Ok(())
}
