pub mod write_results_csv;
