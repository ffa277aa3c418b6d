use super::error::ExportStockError;

/// Разбить записи на группы размером не более `max_size`, сохраняя порядок.
/// Последняя группа может быть короче. `max_size == 0` — ошибка
/// конфигурации, выгрузка не начинается.
pub fn batch<T>(records: Vec<T>, max_size: usize) -> Result<Vec<Vec<T>>, ExportStockError> {
    if max_size == 0 {
        return Err(ExportStockError::Configuration(
            "max_connections must be positive".to_string(),
        ));
    }

    let mut groups = Vec::with_capacity((records.len() + max_size - 1) / max_size);
    let mut current = Vec::new();
    for record in records {
        current.push(record);
        if current.len() == max_size {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batching_preserves_order_and_content() {
        let records: Vec<i32> = (0..10).collect();
        let groups = batch(records.clone(), 3).unwrap();
        let flattened: Vec<i32> = groups.iter().flatten().copied().collect();
        assert_eq!(flattened, records);
    }

    #[test]
    fn group_count_is_ceiling_of_len_over_max() {
        let groups = batch((0..10).collect::<Vec<_>>(), 3).unwrap();
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.len() <= 3));
        assert_eq!(groups.last().unwrap().len(), 1);

        let exact = batch((0..9).collect::<Vec<_>>(), 3).unwrap();
        assert_eq!(exact.len(), 3);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = batch(Vec::<i32>::new(), 5).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn zero_max_size_is_a_configuration_error() {
        assert!(matches!(
            batch(vec![1, 2, 3], 0),
            Err(ExportStockError::Configuration(_))
        ));
    }

    #[test]
    fn batching_is_deterministic() {
        let records: Vec<i32> = (0..17).collect();
        let first = batch(records.clone(), 4).unwrap();
        let second = batch(records, 4).unwrap();
        assert_eq!(first, second);
    }
}
