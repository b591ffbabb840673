use std::time::{Duration, Instant};

use area_resizer::{
    lift_to_color, AreaResampler, ColorImage, Image, RGBColorFormat, ResizeOptions, ResizeSpec,
};
use threadpool::ThreadPool;

const LOG_CONFIG_FILE: &str = "log4rs.yaml";
const IMAGE_WIDTH: usize = 3840;
const IMAGE_HEIGHT: usize = 2160;
const IMAGE_SIZE: usize = IMAGE_WIDTH * IMAGE_HEIGHT;
const TARGET_WIDTH: usize = 1366;
const TARGET_HEIGHT: usize = 768;
const NUMBER_OF_ROUNDS: u32 = 5;

fn create_test_image() -> ColorImage {
    let dots = (0..IMAGE_SIZE)
        .map(|index| {
            let x = index % IMAGE_WIDTH;
            let y = index / IMAGE_WIDTH;
            let red = (x + y * 8) % 256;
            let green = (x * 3 + y) % 256;
            let blue = (x ^ y) % 256;
            RGBColorFormat::new(red as u8, green as u8, blue as u8)
        })
        .collect();
    Image::new(IMAGE_WIDTH, IMAGE_HEIGHT, dots)
}

fn print_statistics(name: &str, durations: &[Duration]) {
    let micros: Vec<f64> = durations.iter().map(|d| d.as_micros() as f64).collect();
    let (Some(min), Some(max)) = (
        micros.iter().copied().reduce(f64::min),
        micros.iter().copied().reduce(f64::max),
    ) else {
        return;
    };
    let mean = micros.iter().sum::<f64>() / micros.len() as f64;
    let variance = micros.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / micros.len() as f64;

    println!(
        "{}: Min: {}, Max: {}, Average: {}, Std Deviation: {}",
        name,
        min,
        max,
        mean.round(),
        variance.sqrt().round(),
    );
}

fn main() {
    if let Err(e) = log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
        eprintln!("Logging disabled, unable to read {}: {}", LOG_CONFIG_FILE, e);
    }

    let spec = match ResizeSpec::new(TARGET_WIDTH, TARGET_HEIGHT) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Invalid target size: {}", e);
            return;
        }
    };
    let resampler = AreaResampler::new(spec);
    println!(
        "Creating test image, resizing {}x{} to {}x{}",
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        resampler.spec().width(),
        resampler.spec().height()
    );
    let test_image = create_test_image();
    let transformer = lift_to_color(resampler);
    let options = ResizeOptions::default();
    let threadpool = ThreadPool::new(options.number_of_threads.max(1));
    println!("Using {} threads", threadpool.max_count());
    let mut sequential_durations: Vec<Duration> = Vec::new();
    let mut threadpool_durations: Vec<Duration> = Vec::new();

    for round in 1..=NUMBER_OF_ROUNDS {
        println!("Starting round {}", round);

        let start = Instant::now();
        if let Err(e) = transformer.transform(&test_image) {
            eprintln!("Resize failed because of: {}", e);
            return;
        }
        let sequential = start.elapsed();

        let start = Instant::now();
        if let Err(e) = transformer.transform_in_threadpool(&test_image, &threadpool) {
            eprintln!("Resize in threadpool failed because of: {}", e);
            return;
        }
        let parallel = start.elapsed();

        println!(
            "Finished round {}: sequential {} microseconds, threadpool {} microseconds",
            round,
            sequential.as_micros(),
            parallel.as_micros(),
        );
        sequential_durations.push(sequential);
        threadpool_durations.push(parallel);
    }

    print_statistics("Sequential", &sequential_durations);
    print_statistics("Threadpool", &threadpool_durations);
}
