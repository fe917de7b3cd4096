use crate::Matrix;

impl bincode::enc::Encode for Matrix {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.rows(), encoder)?;
        bincode::Encode::encode(&self.cols(), encoder)?;
        bincode::Encode::encode(&self.as_slice(), encoder)?;
        Ok(())
    }
}

impl<C> bincode::de::Decode<C> for Matrix {
    fn decode<D: bincode::de::Decoder<Context = C>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let rows: usize = bincode::Decode::decode(decoder)?;
        let cols: usize = bincode::Decode::decode(decoder)?;
        let data: Vec<f64> = bincode::Decode::decode(decoder)?;
        Matrix::from_shape_vec(rows, cols, data)
            .map_err(|e| bincode::error::DecodeError::OtherString(format!("Matrix error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bincode() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        let config = bincode::config::standard();
        let encoded = bincode::encode_to_vec(&m, config)?;
        let (decoded, read): (Matrix, usize) = bincode::decode_from_slice(&encoded, config)?;
        assert_eq!(read, encoded.len());
        assert_eq!(decoded.shape(), (2, 3));
        assert_eq!(m.as_slice(), decoded.as_slice());
        Ok(())
    }

    #[test]
    fn test_bincode_rejects_inconsistent_shape() -> Result<(), Box<dyn std::error::Error>> {
        let config = bincode::config::standard();
        let encoded = bincode::encode_to_vec((3usize, 3usize, vec![1.0f64]), config)?;
        let res: Result<(Matrix, usize), _> = bincode::decode_from_slice(&encoded, config);
        assert!(res.is_err());
        Ok(())
    }

    #[test]
    fn test_bincode_rejects_overflowing_shape() -> Result<(), Box<dyn std::error::Error>> {
        let config = bincode::config::standard();
        let encoded = bincode::encode_to_vec((1usize << 63, 2usize, Vec::<f64>::new()), config)?;
        let res: Result<(Matrix, usize), _> = bincode::decode_from_slice(&encoded, config);
        assert!(res.is_err());
        Ok(())
    }
}
