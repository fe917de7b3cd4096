use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::{Matrix, Vector};

impl serde::Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("rows", &self.rows())?;
        state.serialize_field("cols", &self.cols())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData {
            rows: usize,
            cols: usize,
            data: Vec<f64>,
        }

        let MatrixData { rows, cols, data } = MatrixData::deserialize(deserializer)?;

        Matrix::from_shape_vec(rows, cols, data).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_matrix().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let matrix = Matrix::deserialize(deserializer)?;
        Vector::try_from_matrix(matrix).map_err(serde::de::Error::custom)
    }
}
