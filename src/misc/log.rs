/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for tuning a portfolio and/or fixing issues.

Note, no log implementation is provided by the library.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to the [admission](crate::procedures::admission) of learnt clauses
    pub const ADMISSION: &str = "admission";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [restarts](crate::procedures::restart) and annealing
    pub const RESTART: &str = "restart";

    /// Logs related to [preprocessing](crate::procedures::preprocess)
    pub const PREPROCESSING: &str = "preprocessing";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [portfolio](crate::portfolio)
    pub const PORTFOLIO: &str = "portfolio";
}
