//! Read a matrix file and print its shape, sparsity and entries
//!
//! Run with: cargo run --example matrix_info -- sample_inputs/matrix1.txt

use std::time::Instant;

use smat::SparseMatrix;

fn main() -> smat::Result<()> {
    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_inputs/matrix1.txt".to_string());

    if !std::path::Path::new(&filename).exists() {
        println!("File '{filename}' not found!");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let start = Instant::now();
    let matrix: SparseMatrix = smat::load_matrix(&filename)?;
    println!("Parsed in {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);

    let (nrows, ncols) = matrix.dimensions();
    let nnz = matrix.nnz();
    println!("\nMatrix Information:");
    println!("   Dimensions: {nrows} x {ncols}");
    println!("   Non-zeros: {nnz}");
    if nrows > 0 && ncols > 0 {
        println!(
            "   Density: {:.6}%",
            (nnz as f64 / (nrows as f64 * ncols as f64)) * 100.0
        );
    }
    if let Err(e) = matrix.check_bounds() {
        println!("   Warning: {e}");
    }

    println!("\nEntries (row-major):");
    for (row, col, value) in matrix.sorted_entries() {
        println!("   [{row}, {col}] = {value}");
    }

    Ok(())
}
