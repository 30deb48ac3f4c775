fn main() {
    #[cfg(all(feature = "parallel", feature = "internal-tests"))]
    {
        println!("{}", dimfft::parallel::__test_parallel_threshold());
    }
    #[cfg(not(all(feature = "parallel", feature = "internal-tests")))]
    {
        // Example requires parallel + internal-tests
        println!("0");
    }
}
