pub mod app;

pub mod common {
    pub mod currency;
    pub mod error;
    pub mod event;
    pub mod locale;
    pub mod money;
}

pub mod domain {
    pub mod book;
    pub mod debt;
    pub mod directory;
    pub mod sorting;
    pub mod totals;
}

pub mod io {
    pub mod reader;
    pub mod writer;
}

pub mod ui {
    pub mod form;
    pub mod history;
    pub mod language;
}

pub mod worker {
    pub mod processor;
    pub mod handlers {
        pub mod debt;
        pub mod payment;
        pub mod settle;
    }
}
