use passplot::{constellation, render_svg, ConstellationStyle, IqPoint, MarkerShape};
use std::time::Instant;

// Noisy QPSK cloud from a fixed LCG so runs are comparable.
fn qpsk_cloud(n: usize, noise: f64) -> Vec<IqPoint> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    };
    let s = std::f64::consts::FRAC_1_SQRT_2;
    (0..n)
        .map(|_| {
            let i = if next() >= 0.0 { s } else { -s };
            let q = if next() >= 0.0 { s } else { -s };
            IqPoint::new(i + next() * noise, q + next() * noise)
        })
        .collect()
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut points = 100_000usize;
    let mut runs = 10usize;
    let mut circle = false;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--points=") { if let Ok(v)=val.parse() { points=v; } }
        else if let Some(val)=a.strip_prefix("--runs=") { if let Ok(v)=val.parse() { runs=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
        else if a == "--circle" { circle = true; }
    }
    let runs = runs.max(1);

    let pts = qpsk_cloud(points, 0.3);
    let style = ConstellationStyle {
        marker_shape: if circle { MarkerShape::Circle } else { MarkerShape::Square },
        ..Default::default()
    };

    let mut times_ms: Vec<f64> = Vec::with_capacity(runs);
    let mut bytes = 0usize;
    for _ in 0..runs {
        let t0 = Instant::now();
        let prims = constellation::render(&pts, 400.0, 400.0, &style);
        let doc = render_svg(&prims, 400.0, 400.0);
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
        bytes = doc.len();
    }
    times_ms.sort_by(|a, b| a.total_cmp(b));
    let med = times_ms[times_ms.len() / 2];
    println!(
        "points={} shape={:?} runs={} svg_bytes={} median_ms={:.3} min_ms={:.3}",
        points, style.marker_shape, runs, bytes, med, times_ms[0]
    );
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.3} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
