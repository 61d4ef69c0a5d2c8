use rand::Rng;

/// Random values for property-style tests.
pub trait Generatable {
    fn gen(context: &mut GeneratorContext) -> Self;
}

// Characters that tend to break naive Markdown or UTF-8 handling.
const AWKWARD: &[char] = &['*', '#', '`', '_', '\n', '|', '<', '>', 'é', '量', '🦀', ' '];

impl Generatable for String {
    fn gen(context: &mut GeneratorContext) -> Self {
        let n = context.rng.gen_range(0..24);
        let noise: String = (0..n)
            .map(|_| AWKWARD[context.rng.gen_range(0..AWKWARD.len())])
            .collect();
        // The hex id keeps generated strings distinct from one another.
        let id: u64 = context.rng.gen();
        format!("{}String{:016x}", noise, id)
    }
}

pub struct GeneratorContext {
    pub rng: rand::rngs::ThreadRng,
}

impl GeneratorContext {
    pub fn new() -> GeneratorContext {
        let rng = rand::thread_rng();
        GeneratorContext { rng }
    }

    pub fn gen<T>(&mut self) -> T
    where
        T: Generatable,
    {
        T::gen(self)
    }
}

impl Default for GeneratorContext {
    fn default() -> Self {
        Self::new()
    }
}
