use anyhow::Result;
use postmat::{decode_4d, reshape_to_matrix, table, BufferSource};

fn main() -> Result<()> {
    let data: Vec<f64> = (0..24).map(|elem| elem as f64).collect();
    let source = BufferSource::new(data, &[1, 3, 4, 2]);

    let decoded = decode_4d::<f64, _>(&source)?;
    println!("{:?}", decoded);

    let flat: Vec<f64> = (1..=25).map(|elem| elem as f64).collect();
    println!("{}", table(&reshape_to_matrix(&flat, 5, 5)?));

    Ok(())
}
