use ndarray::{Array, ArrayBase, Data, Dimension};

/// Logistic function `1 / (1 + e^-z)`.
///
/// No clipping is applied: very negative inputs overflow the exponential and
/// saturate at 0, very positive ones saturate at 1.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Element-wise `sigmoid` over an array of any dimension.
pub fn sigmoid_array<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(sigmoid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_symmetric() {
        for &z in &[-30.0, -4.2, -1.0, -0.1, 0.3, 2.5, 17.0] {
            assert!((sigmoid(z) + sigmoid(-z) - 1.0).abs() < 1e-12, "z = {}", z);
        }
    }

    #[test]
    fn sigmoid_stays_in_open_interval() {
        for &z in &[-20.0, -5.0, -0.5, 0.0, 0.5, 5.0, 20.0] {
            let s = sigmoid(z);
            assert!(s > 0.0 && s < 1.0, "sigmoid({}) = {}", z, s);
        }
    }

    #[test]
    fn sigmoid_saturates_without_clipping() {
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert_eq!(sigmoid(1000.0), 1.0);
    }

    #[test]
    fn sigmoid_array_is_element_wise() {
        let z = array![[0.0, 1.0], [-1.0, 3.0]];
        let s = sigmoid_array(&z);
        assert_eq!(s.shape(), &[2, 2]);
        assert_eq!(s[[0, 0]], 0.5);
        assert_eq!(s[[0, 1]], sigmoid(1.0));
        assert_eq!(s[[1, 0]], sigmoid(-1.0));
        assert_eq!(s[[1, 1]], sigmoid(3.0));
    }
}
