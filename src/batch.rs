/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::ShapeError;
use crate::ColorVector;
use half::f16;
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Any one-step conversion, e.g. [crate::lin_srgb_to_oklab]
pub type Conversion = fn(ColorVector) -> ColorVector;

fn check_interleaved(len: usize) -> Result<(), ShapeError> {
    if len % 3 != 0 {
        tracing::debug!(len, "interleaved buffer holds a partial triplet");
        return Err(ShapeError::Interleaved { len });
    }
    Ok(())
}

/// Applies `conversion` to every vector in place
pub fn convert_vectors(conversion: Conversion, vectors: &mut [ColorVector]) {
    tracing::trace!(
        count = vectors.len(),
        parallel = cfg!(feature = "rayon"),
        "converting vectors"
    );
    #[cfg(feature = "rayon")]
    {
        vectors.par_iter_mut().for_each(|v| *v = conversion(*v));
    }
    #[cfg(not(feature = "rayon"))]
    {
        vectors.iter_mut().for_each(|v| *v = conversion(*v));
    }
}

/// Applies `conversion` in place to a buffer of interleaved triplets,
/// e.g. `r, g, b, r, g, b, ...`
///
/// # Errors
/// [ShapeError::Interleaved] when `data.len()` is not a multiple of 3, nothing is converted then.
pub fn convert_interleaved(conversion: Conversion, data: &mut [f64]) -> Result<(), ShapeError> {
    check_interleaved(data.len())?;
    tracing::trace!(
        count = data.len() / 3,
        parallel = cfg!(feature = "rayon"),
        "converting interleaved buffer"
    );

    let convert = |chunk: &mut [f64]| {
        let dst = conversion([chunk[0], chunk[1], chunk[2]]);
        chunk.copy_from_slice(&dst);
    };

    #[cfg(feature = "rayon")]
    {
        data.par_chunks_exact_mut(3).for_each(convert);
    }
    #[cfg(not(feature = "rayon"))]
    {
        data.chunks_exact_mut(3).for_each(convert);
    }
    Ok(())
}

/// Same as [convert_interleaved] for half float storage.
///
/// Components are widened to `f64` for the conversion and narrowed back once.
pub fn convert_interleaved_f16(conversion: Conversion, data: &mut [f16]) -> Result<(), ShapeError> {
    check_interleaved(data.len())?;
    tracing::trace!(
        count = data.len() / 3,
        parallel = cfg!(feature = "rayon"),
        "converting interleaved f16 buffer"
    );

    let convert = |chunk: &mut [f16]| {
        let src = [chunk[0].to_f64(), chunk[1].to_f64(), chunk[2].to_f64()];
        let dst = conversion(src);
        for (dst_value, value) in chunk.iter_mut().zip(dst) {
            *dst_value = f16::from_f64(value);
        }
    };

    #[cfg(feature = "rayon")]
    {
        data.par_chunks_exact_mut(3).for_each(convert);
    }
    #[cfg(not(feature = "rayon"))]
    {
        data.chunks_exact_mut(3).for_each(convert);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lin_srgb_to_oklab, lin_srgb_to_xyz, oklab_to_lin_srgb, srgb_to_lin_srgb};
    use approx::assert_abs_diff_eq;

    #[test]
    fn vectors_match_single_calls() {
        let source: Vec<ColorVector> = (0..64)
            .map(|i| {
                let t = i as f64 / 63.;
                [t, 1. - t, (t * 7.).fract()]
            })
            .collect();
        let mut converted = source.clone();
        convert_vectors(lin_srgb_to_oklab, &mut converted);
        for (src, dst) in source.iter().zip(&converted) {
            assert_eq!(lin_srgb_to_oklab(*src), *dst);
        }
        convert_vectors(oklab_to_lin_srgb, &mut converted);
        for (src, dst) in source.iter().zip(&converted) {
            for i in 0..3 {
                assert_abs_diff_eq!(src[i], dst[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn interleaved_buffer() {
        let mut data = vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
        convert_interleaved(lin_srgb_to_xyz, &mut data).unwrap();
        assert_eq!(&data[..3], &lin_srgb_to_xyz([1.0, 1.0, 1.0])[..]);
        assert!(data[3..].iter().all(|v| v.to_bits() == 0));
    }

    #[test]
    fn partial_triplet_is_rejected_untouched() {
        let mut data = vec![0.5, 0.5, 0.5, 0.5];
        assert_eq!(
            convert_interleaved(srgb_to_lin_srgb, &mut data),
            Err(ShapeError::Interleaved { len: 4 })
        );
        assert_eq!(data, vec![0.5; 4]);

        let mut halves = vec![f16::ONE; 5];
        assert_eq!(
            convert_interleaved_f16(srgb_to_lin_srgb, &mut halves),
            Err(ShapeError::Interleaved { len: 5 })
        );
    }

    #[test]
    fn half_float_buffer() {
        let mut data = [0.5f64, 1.0, 0.0].map(f16::from_f64).to_vec();
        convert_interleaved_f16(srgb_to_lin_srgb, &mut data).unwrap();
        assert_abs_diff_eq!(data[0].to_f64(), 0.214041140482232, epsilon = 1e-3);
        assert_eq!(data[1], f16::ONE);
        assert_eq!(data[2], f16::ZERO);
    }

    #[test]
    fn empty_buffers_are_fine() {
        let mut nothing: Vec<f64> = Vec::new();
        assert!(convert_interleaved(lin_srgb_to_oklab, &mut nothing).is_ok());
        let mut vectors: Vec<ColorVector> = Vec::new();
        convert_vectors(lin_srgb_to_oklab, &mut vectors);
        assert!(vectors.is_empty());
    }
}
