use colorsteps_rs::*;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorsteps_rs=debug,app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let swatches: [(&str, ColorVector); 5] = [
        ("white", [1.0, 1.0, 1.0]),
        ("black", [0.0, 0.0, 0.0]),
        ("red", [1.0, 0.0, 0.0]),
        ("green", [0.0, 1.0, 0.0]),
        ("blue", [0.0, 0.0, 1.0]),
    ];

    for (name, srgb) in swatches {
        let linear = srgb_to_lin_srgb(srgb);
        let oklab = lin_srgb_to_oklab(linear);
        let oklab_gamma = lin_srgb_to_oklab_gamma(linear);
        let oklch = oklab_to_oklch(oklab);
        let xyz = lin_srgb_to_xyz(linear);
        let ipt = xyz_ipt_to_ipt(xyz_to_xyz_ipt(xyz));
        println!("{name}");
        println!("  Oklab       {:?}", oklab);
        println!("  Oklab (γ)   {:?}", oklab_gamma);
        println!("  Oklch       {:?}", oklch);
        println!("  XYZ D65     {:?}", xyz);
        println!("  XYZ D50     {:?}", xyz_d65_to_xyz_d50(xyz));
        println!("  IPT         {:?}", ipt);
    }

    let width = 1920usize;
    let height = 1080usize;
    let mut buffer: Vec<f64> = (0..width * height * 3)
        .map(|i| (i % 256) as f64 / 255.)
        .collect();

    let start_time = Instant::now();
    if let Err(err) = convert_interleaved(srgb_to_lin_srgb, &mut buffer) {
        tracing::error!(%err, "linearization failed");
        return;
    }
    if let Err(err) = convert_interleaved(lin_srgb_to_oklab, &mut buffer) {
        tracing::error!(%err, "oklab conversion failed");
        return;
    }
    tracing::info!(elapsed = ?start_time.elapsed(), "sRGB -> Oklab, {width}x{height}");

    // Shape errors are reported, not panicked on
    if let Err(err) = multiply_matrix_vector(&[[1.0, 0.0], [0.0, 1.0]], &[1.0, 2.0, 3.0]) {
        tracing::warn!(%err, "rejected operands");
    }
}
