use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::{pymodule, types::PyModule, Bound, PyErr, PyResult, Python};

use crate::{apriori, fp_growth_algorithm, FrequentItemsets, MinSupport, MiningError, TransactionStore};

type PyItemsets = Vec<(Vec<String>, usize, f64)>;

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn to_rows(itemsets: &FrequentItemsets, store: &TransactionStore) -> PyItemsets {
    itemsets
        .iter()
        .map(|entry| {
            let labels = store.vocabulary().labels_of(entry.items);
            (labels.into_iter().map(str::to_string).collect(), entry.support, entry.ratio)
        })
        .collect()
}

#[pymodule]
fn freqset<'py>(m: &Bound<'py, PyModule>) -> PyResult<()> {
    #[pyfn(m)]
    #[pyo3(name = "apriori", signature = (transactions, min_support, parallel = false))]
    fn apriori_py(transactions: Vec<Vec<String>>, min_support: f64, parallel: bool) -> PyResult<PyItemsets> {
        let min_support = MinSupport::new(min_support)?;
        let store = TransactionStore::from_records(transactions);
        let output = apriori(&store, min_support, parallel);
        Ok(to_rows(&output.itemsets, &store))
    }

    #[pyfn(m)]
    #[pyo3(name = "fp_growth", signature = (transactions, min_support, parallel = false))]
    fn fp_growth_py(transactions: Vec<Vec<String>>, min_support: f64, parallel: bool) -> PyResult<PyItemsets> {
        let min_support = MinSupport::new(min_support)?;
        let store = TransactionStore::from_records(transactions);
        let itemsets = fp_growth_algorithm(&store, min_support, parallel);
        Ok(to_rows(&itemsets, &store))
    }

    #[pyfn(m)]
    #[pyo3(name = "closed_itemsets")]
    fn closed_itemsets_py(transactions: Vec<Vec<String>>, min_support: f64) -> PyResult<PyItemsets> {
        let min_support = MinSupport::new(min_support)?;
        let store = TransactionStore::from_records(transactions);
        let output = apriori(&store, min_support, false);
        Ok(to_rows(&output.itemsets.closed(), &store))
    }

    #[pyfn(m)]
    #[pyo3(name = "fp_growth_dense")]
    fn fp_growth_dense_py<'py>(
        py: Python<'py>,
        transactions: PyReadonlyArray2<'py, i32>,
        min_support: f64,
    ) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
        let min_support = MinSupport::new(min_support)?;
        let store = TransactionStore::from_matrix(transactions.as_array());
        let frequent = fp_growth_algorithm(&store, min_support, true);

        let mut result = Vec::new();

        for level in frequent.levels() {
            if level.is_empty() {
                continue;
            }

            let itemset_size = level.itemset_size;
            let num_itemsets = level.len();
            let mut data = vec![0usize; num_itemsets * itemset_size];

            for (i, itemset) in level.iter_itemsets().enumerate() {
                for (j, &item) in itemset.iter().enumerate() {
                    data[i * itemset_size + j] = item;
                }
            }

            let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
                .map_err(|_| PyValueError::new_err("Failed to create array"))?;

            result.push(array.into_pyarray(py));
        }

        Ok(result)
    }

    Ok(())
}
