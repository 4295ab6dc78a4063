//! Writes a reproducible synthetic `Table2.csv` for trying out the figure.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HEADER: [&str; 9] = [
    "author", "disease", "modality", "method", "dim", "val1", "val2", "val3", "notes",
];

/// Disease labels as they tend to appear in papers, with a typical Dice score.
const DISEASES: [(&str, f64); 9] = [
    ("ISLES 2015", 0.55),
    ("Ischemic stroke", 0.6),
    ("BraTS 2021", 0.8),
    ("Brain tumor", 0.75),
    ("Multiple sclerosis", 0.65),
    ("MS lesions", 0.6),
    ("WMH", 0.7),
    ("Alzheimer's disease", 0.5),
    ("Healthy controls", 0.5),
];

const METHODS: [&str; 6] = ["Diffusion", "AE", "VAE", "GAN", "vae ", "Transformer"];
const MODALITIES: [&str; 3] = ["MRI", "FLAIR", "CT"];

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let output_path = "Table2.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADER)?;

    let mut rows = 0usize;
    for (i, &(disease, base)) in DISEASES.iter().enumerate() {
        for (j, &method) in METHODS.iter().enumerate() {
            // Leave some combinations out so panels get uneven bar counts.
            if (i + j) % 4 == 3 {
                continue;
            }
            for k in 0..rng.gen_range(1..=3) {
                let score: f64 = (base + rng.gen_range(-0.15..0.15)).clamp(0.0, 1.0);
                let val1 = match rng.gen_range(0..10) {
                    0 => "--".to_string(),
                    1 => String::new(),
                    _ => format!("{score:.3}"),
                };
                let author = format!("Author{}{}", i * METHODS.len() + j, k);
                let modality = MODALITIES[rng.gen_range(0..MODALITIES.len())];
                let dim = if rng.gen_bool(0.5) { "2D" } else { "3D" };
                let val2 = format!("{:.3}", (score - 0.05).max(0.0));

                writer.write_record([
                    author.as_str(),
                    disease,
                    modality,
                    method,
                    dim,
                    val1.as_str(),
                    val2.as_str(),
                    "--",
                    "",
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush()?;

    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
