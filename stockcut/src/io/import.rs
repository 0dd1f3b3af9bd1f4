use log::debug;

use crate::entities::{CutGroup, CutInstance, CutRequirement, LAP_FACTOR, StockSpec};
use crate::error::{ConfigError, GroupError};
use crate::io::ext_repr::{ExtCutGroup, ExtCutInstance, ExtRequirement, ExtStockSpec};

/// Imports an instance into the library.
/// Every group's stock specification is validated before anything is returned.
pub fn import(ext_instance: &ExtCutInstance) -> Result<CutInstance, GroupError> {
    let groups = ext_instance
        .groups
        .iter()
        .map(import_group)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "imported instance '{}' with {} groups",
        ext_instance.name,
        groups.len()
    );

    Ok(CutInstance {
        name: ext_instance.name.clone(),
        groups,
    })
}

pub fn import_group(ext_group: &ExtCutGroup) -> Result<CutGroup, GroupError> {
    let stock = import_stock(&ext_group.stock).map_err(|source| GroupError {
        group: ext_group.name.clone(),
        source,
    })?;

    Ok(CutGroup {
        name: ext_group.name.clone(),
        stock,
        requirements: ext_group
            .requirements
            .iter()
            .map(import_requirement)
            .collect(),
    })
}

pub fn import_stock(ext_stock: &ExtStockSpec) -> Result<StockSpec, ConfigError> {
    let splice_overlap = ext_stock
        .splice_overlap
        .or(ext_stock.bar_diameter.map(|d| LAP_FACTOR * d))
        .unwrap_or(0.0);

    StockSpec::new(ext_stock.stock_length, ext_stock.kerf_loss, splice_overlap)
}

/// Blank or negative fields are normalized to zero, making the requirement ignorable.
pub fn import_requirement(ext_req: &ExtRequirement) -> CutRequirement {
    CutRequirement {
        length: ext_req.length.unwrap_or(0.0),
        quantity: ext_req.quantity.unwrap_or(0).max(0) as usize,
        label: ext_req.label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTANCE: &str = r#"{
        "name": "slab",
        "groups": [
            {
                "name": "D12",
                "stock": { "stock_length": 12.0, "kerf_loss": 0.005, "bar_diameter": 0.012 },
                "requirements": [
                    { "length": 3.2, "quantity": 10, "label": "S1" },
                    { "length": null, "quantity": 4, "label": "" },
                    { "length": 2.0, "quantity": -3, "label": "S2" }
                ]
            },
            {
                "name": "HEA200",
                "stock": { "stock_length": 6.0, "splice_overlap": 0.0 },
                "requirements": [ { "length": 5.8, "quantity": 3, "label": "X" } ]
            }
        ]
    }"#;

    #[test]
    fn import_instance() {
        let ext: ExtCutInstance = serde_json::from_str(INSTANCE).unwrap();
        let instance = import(&ext).unwrap();
        assert_eq!(instance.n_groups(), 2);

        let d12 = &instance.groups[0];
        assert!((d12.stock.splice_overlap() - 0.48).abs() < 1e-9);
        assert_eq!(d12.requirements.len(), 3);
        assert!(d12.requirements[1].is_ignorable());
        assert_eq!(d12.requirements[2].quantity, 0);

        let hea = &instance.groups[1];
        assert_eq!(hea.stock.kerf_loss(), 0.0);
        assert_eq!(hea.stock.splice_overlap(), 0.0);
    }

    #[test]
    fn invalid_stock_names_the_group() {
        let mut ext: ExtCutInstance = serde_json::from_str(INSTANCE).unwrap();
        ext.groups[1].stock.splice_overlap = Some(6.0);
        let err = import(&ext).unwrap_err();
        assert_eq!(err.group, "HEA200");
        assert!(matches!(
            err.source,
            ConfigError::SpliceOverlapTooLong { .. }
        ));
    }
}
