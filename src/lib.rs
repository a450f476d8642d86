/*!
```console
                     __                  __
  ____  ____  ______/ /_____ ___  ____ _/ /_
 / __ \/ __ \/ ___/ __/ __ `__ \/ __ `/ __/
/ /_/ / /_/ (__  ) /_/ / / / / / /_/ / /_
/ .___/\____/____/\__/_/ /_/ /_/\__,_/\__/
/_/
```

Post-processing for inference outputs: decodes raw rank-3/4 tensor
buffers into nested arrays and provides the matrix algebra used to
assemble final results (e.g. combining detection boxes with
segmentation masks).
*/

mod core;

pub use core::{
    combine, decode_3d, decode_4d, multiply, reshape_array, reshape_to_matrix, sigmoid, slice,
    table, transpose, Array3, Array4, BufferSource, Matrix, TensorSource,
};
