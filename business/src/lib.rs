pub mod application {
    pub mod store;
    pub mod image {
        pub mod upload;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod admin {
        pub mod errors;
        pub mod gate;
    }
    pub mod image {
        pub mod errors;
        pub mod model;
        pub mod storage;
        pub mod use_cases {
            pub mod upload;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod update;
        }
    }
}
