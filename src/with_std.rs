
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        marker,
        mem,
        ops,
        slice,
        str,
        string,
        vec,
    };

    pub use std::string::{String, ToString};
    pub use std::vec::Vec;

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
