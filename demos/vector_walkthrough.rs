//! Walkthrough of the vector operations on a handful of fixed inputs.
//!
//! Run with `RUST_LOG=debug` to see the error translations logged by the
//! library.

use decvec::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("decvec walkthrough");
    println!("==================");

    arithmetic_examples()?;
    geometry_examples()?;
    predicate_examples()?;
    projection_examples()?;
    error_examples();

    println!("All examples completed successfully!");
    Ok(())
}

fn arithmetic_examples() -> VectorResult<()> {
    println!("\n-- arithmetic --");
    let v = Vector::new([8.218, -9.341])?;
    let w = Vector::new([-1.129, 2.111])?;
    println!("{} + {} = {}", v, w, v.add(&w)?);

    let v = Vector::new([7.119, 8.215])?;
    let w = Vector::new([-8.223, 0.878])?;
    println!("{} - {} = {}", v, w, v.subtract(&w)?);

    let v = Vector::new([1.671, -1.012, -0.318])?;
    println!("7.41 * {} = {}", v, v.scale(7.41)?);
    Ok(())
}

fn geometry_examples() -> VectorResult<()> {
    println!("\n-- magnitude, direction, products --");
    println!("|(-0.221, 7.437)| = {}", Vector::new([-0.221, 7.437])?.magnitude());
    println!(
        "|(8.813, -1.331, -6.247)| = {}",
        Vector::new([8.813, -1.331, -6.247])?.magnitude()
    );
    println!("unit (5.581, -2.136) = {}", Vector::new([5.581, -2.136])?.normalize()?);

    let v = Vector::new([7.887, 4.138])?;
    let w = Vector::new([-8.802, 6.776])?;
    println!("{} . {} = {}", v, w, v.dot_product(&w)?);

    let v = Vector::new([3.183, -7.627])?;
    let w = Vector::new([-2.668, 5.319])?;
    println!("angle = {} rad", v.angle(&w, AngleUnit::Radians)?);

    let v = Vector::new([7.35, 0.221, 5.188])?;
    let w = Vector::new([2.751, 8.259, 3.985])?;
    println!("angle = {} deg", v.angle(&w, AngleUnit::Degrees)?);

    let v = Vector::new([8.462, 7.893, -8.187])?;
    let w = Vector::new([6.984, -5.975, 4.778])?;
    println!("{} x {} = {}", v, w, v.cross_product(&w)?);
    println!("parallelogram area = {}", v.area_parallelogram(&w)?);
    println!("triangle area = {}", v.area_triangle(&w)?);
    Ok(())
}

fn predicate_examples() -> VectorResult<()> {
    println!("\n-- parallel / orthogonal --");
    let pairs = [
        (vec![-7.579, -7.88], vec![22.737, 23.64]),
        (vec![-2.029, 9.97, 4.172], vec![-9.231, -6.639, -7.245]),
        (vec![-2.328, -7.284, -1.214], vec![-1.821, 1.072, -2.94]),
        (vec![2.118, 4.827], vec![0.0, 0.0]),
    ];

    for (v, w) in pairs {
        let v = Vector::new(v)?;
        let w = Vector::new(w)?;
        println!(
            "{} vs {}: parallel={} orthogonal={}",
            v,
            w,
            v.is_parallel(&w)?,
            v.is_orthogonal(&w)?
        );
    }
    Ok(())
}

fn projection_examples() -> VectorResult<()> {
    println!("\n-- projection --");
    let v = Vector::new([3.039, 1.879])?;
    let b = Vector::new([0.825, 2.036])?;
    println!("proj = {}", v.projection(&b)?);

    let v = Vector::new([-9.88, -3.264, -8.159])?;
    let b = Vector::new([-2.155, -9.353, -9.473])?;
    println!("perp = {}", v.projection_perp(&b)?);

    let v = Vector::new([3.009, -6.172, 3.692, -2.51])?;
    let b = Vector::new([6.404, -9.144, 2.759, 8.718])?;
    println!("proj = {}", v.projection(&b)?);
    println!("perp = {}", v.projection_perp(&b)?);
    Ok(())
}

fn error_examples() {
    println!("\n-- failures --");
    let empty: Vec<f64> = Vec::new();
    let zero = Vector::new([0, 0]).ok();
    let flat = Vector::new([1, 2]).ok();

    if let Err(e) = Vector::new(empty) {
        println!("empty: {}", e);
    }
    if let (Some(zero), Some(flat)) = (zero, flat) {
        if let Err(e) = zero.normalize() {
            println!("normalize: {}", e);
        }
        if let Err(e) = flat.projection(&zero) {
            println!("projection: {}", e);
        }
        if let Err(e) = flat.area_parallelogram(&flat) {
            println!("area: {}", e);
        }
    }
}
