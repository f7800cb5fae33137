//! Value vocabularies for variables, rules, models and external endpoints

wire_enum! {
    /// Where a variable's value comes from
    pub enum DataSource {
        Event => "EVENT",
        ModelScore => "MODEL_SCORE",
        ExternalModelScore => "EXTERNAL_MODEL_SCORE",
    }
}

wire_enum! {
    /// Variable data type
    pub enum DataType {
        String => "STRING",
        Integer => "INTEGER",
        Float => "FLOAT",
        Boolean => "BOOLEAN",
    }
}

wire_enum! {
    /// Rule expression language
    pub enum Language {
        Detectorpl => "DETECTORPL",
    }
}

wire_enum! {
    /// Association state of an external model endpoint
    pub enum ModelEndpointStatus {
        Associated => "ASSOCIATED",
        Dissociated => "DISSOCIATED",
    }
}

wire_enum! {
    /// Request body format sent to an external model
    pub enum ModelInputDataFormat {
        TextCsv => "TEXT_CSV",
        ApplicationJson => "APPLICATION_JSON",
    }
}

wire_enum! {
    /// Response body format returned by an external model
    pub enum ModelOutputDataFormat {
        TextCsv => "TEXT_CSV",
        ApplicationJsonlines => "APPLICATION_JSONLINES",
    }
}

wire_enum! {
    /// Hosting platform of an external model
    pub enum ModelSource {
        Sagemaker => "SAGEMAKER",
    }
}

wire_enum! {
    /// Model type
    pub enum ModelTypeEnum {
        OnlineFraudInsights => "ONLINE_FRAUD_INSIGHTS",
    }
}

wire_enum! {
    /// How a detector version evaluates its rules
    pub enum RuleExecutionMode {
        /// Evaluate every rule and return all matched outcomes
        AllMatched => "ALL_MATCHED",
        /// Stop at the first matching rule
        FirstMatched => "FIRST_MATCHED",
    }
}

impl Default for RuleExecutionMode {
    fn default() -> Self {
        RuleExecutionMode::FirstMatched
    }
}

wire_enum! {
    /// Training data source kind
    pub enum TrainingDataSourceEnum {
        ExternalEvents => "EXTERNAL_EVENTS",
    }
}
