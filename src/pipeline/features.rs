pub const LOT_AREA: &str = "LotArea";
pub const OVERALL_QUAL: &str = "OverallQual";
pub const YEAR_BUILT: &str = "YearBuilt";
pub const FIRST_FLR_SF: &str = "1stFlrSF";
pub const GR_LIV_AREA: &str = "GrLivArea";
pub const GARAGE_CARS: &str = "GarageCars";
pub const NEIGHBORHOOD: &str = "Neighborhood";

/// Columns the dashboard populates, in form order.
pub const INPUT_COLUMNS: [&str; 7] = [
    LOT_AREA,
    OVERALL_QUAL,
    YEAR_BUILT,
    FIRST_FLR_SF,
    GR_LIV_AREA,
    GARAGE_CARS,
    NEIGHBORHOOD,
];

/// Raw property attributes as collected by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInputs {
    pub lot_area: u32,
    pub overall_qual: u32,
    pub year_built: u32,
    pub first_flr_sf: u32,
    pub gr_liv_area: u32,
    pub garage_cars: u32,
    pub neighborhood: String,
}

impl PropertyInputs {
    /// The six numeric columns, verbatim.
    pub fn numeric_columns(&self) -> [(&'static str, f64); 6] {
        [
            (LOT_AREA, self.lot_area as f64),
            (OVERALL_QUAL, self.overall_qual as f64),
            (YEAR_BUILT, self.year_built as f64),
            (FIRST_FLR_SF, self.first_flr_sf as f64),
            (GR_LIV_AREA, self.gr_liv_area as f64),
            (GARAGE_CARS, self.garage_cars as f64),
        ]
    }
}

/// A single-record feature table laid out in a model's declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureRow {
    /// Reorders `table` to exactly match `schema`.
    ///
    /// Schema columns missing from `table` are filled with 0; table columns
    /// absent from `schema` are dropped.
    pub fn reindex(table: &[(&str, f64)], schema: &[String]) -> Self {
        let values = schema
            .iter()
            .map(|name| {
                table
                    .iter()
                    .find(|(column, _)| *column == name.as_str())
                    .map_or(0.0, |(_, value)| *value)
            })
            .collect();

        Self {
            columns: schema.to_vec(),
            values,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reindex_follows_schema_order() {
        let table = [("a", 1.0), ("b", 2.0), ("c", 3.0)];
        let row = FeatureRow::reindex(&table, &schema(&["c", "a", "b"]));

        assert_eq!(row.columns(), schema(&["c", "a", "b"]).as_slice());
        assert_eq!(row.values(), &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn reindex_fills_missing_and_drops_extra() {
        let table = [("a", 1.0), ("extra", 9.0)];
        let row = FeatureRow::reindex(&table, &schema(&["z", "a"]));

        assert_eq!(row.values(), &[0.0, 1.0]);
        assert_eq!(row.get("extra"), None);
        assert_eq!(row.get("z"), Some(0.0));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn numeric_columns_are_verbatim() {
        let inputs = PropertyInputs {
            lot_area: 8450,
            overall_qual: 7,
            year_built: 2003,
            first_flr_sf: 856,
            gr_liv_area: 1710,
            garage_cars: 2,
            neighborhood: "CollgCr".into(),
        };

        let cols = inputs.numeric_columns();
        assert_eq!(cols[0], (LOT_AREA, 8450.0));
        assert_eq!(cols[3], (FIRST_FLR_SF, 856.0));
        assert_eq!(cols[5], (GARAGE_CARS, 2.0));
    }
}
