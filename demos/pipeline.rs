use anyhow::Result;
use postmat::{
    combine, decode_3d, multiply, reshape_array, sigmoid, slice, table, BufferSource,
};

// Assembles detection boxes with segmentation masks from two raw
// inference outputs, the way a YOLO-style post-processing step would.
fn main() -> Result<()> {
    // Detection head: batch of 1, 2 candidates, 5 box fields + 3 mask
    // weights each.
    let detections = BufferSource::new(
        vec![
            12.0, 20.0, 48.0, 56.0, 0.91, 0.2, -0.4, 1.1, //
            30.0, 14.0, 70.0, 44.0, 0.78, -0.7, 0.9, 0.3,
        ],
        &[1, 2, 8],
    );

    // Mask head: 3 prototype masks of 2 x 2 pixels.
    let prototypes = BufferSource::new(
        vec![
            0.5, -1.0, 0.25, 2.0, //
            1.5, 0.0, -0.75, 1.0, //
            -0.5, 1.0, 0.5, -2.0,
        ],
        &[3, 2, 2],
    );

    let detections: Vec<Vec<f64>> = decode_3d(&detections)?.remove(0);
    let prototypes = reshape_array(&decode_3d::<f64, _>(&prototypes)?);

    let boxes = slice(&detections, 0, 5)?;
    let weights = slice(&detections, 5, 8)?;

    let masks = sigmoid(&multiply(&weights, &prototypes)?)?;
    let combined = combine(&boxes, &masks)?;

    println!("{}", table(&combined));

    Ok(())
}
