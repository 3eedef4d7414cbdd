use crate::entities::{ItemType, LoadInstance};
use crate::error::LoadError;
use crate::io::ext_repr::{ExtItemType, ExtLoadInstance};

/// Converts and validates an external instance.
pub fn import(ext_instance: &ExtLoadInstance) -> Result<LoadInstance, LoadError> {
    let items = ext_instance
        .items
        .iter()
        .map(import_item)
        .collect::<Result<Vec<ItemType>, LoadError>>()?;
    LoadInstance::new(ext_instance.capacity, items)
}

pub fn import_item(ext_item: &ExtItemType) -> Result<ItemType, LoadError> {
    let id = ext_item.id as usize;
    if ext_item.weight <= 0 {
        return Err(LoadError::InvalidItem {
            id,
            reason: format!("unit weight must be positive, got {}", ext_item.weight),
        });
    }
    Ok(ItemType::new(id, ext_item.weight as usize, ext_item.value))
}
