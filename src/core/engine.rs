use crate::domain::model::{BirthInput, FactRecord};
use crate::domain::ports::FactsPipeline;
use crate::utils::error::Result;

/// Thin runner around a pipeline: stage logging and nothing else.
pub struct BlueprintEngine<P: FactsPipeline> {
    pipeline: P,
}

impl<P: FactsPipeline> BlueprintEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, input: &BirthInput) -> Result<FactRecord> {
        tracing::info!(
            "Computing facts for {} born {} in {}, {}",
            input.full_name,
            input.date,
            input.city,
            input.country
        );

        let record = self.pipeline.compute_facts(input).await?;

        tracing::info!(
            "Facts ready: sun {}, life path {}, {} {}",
            record.western.sun_sign,
            record.numerology.life_path,
            record.chinese.element,
            record.chinese.animal
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        BirthFacts, ChineseFacts, DesignFacts, NumerologyFacts, RawLongitudes, WesternFacts,
    };
    use crate::utils::error::BlueprintError;
    use async_trait::async_trait;

    struct StubPipeline {
        fail: bool,
    }

    fn stub_record() -> FactRecord {
        FactRecord {
            name: "Stub".into(),
            birth: BirthFacts {
                local: "1990-01-01T12:00:00".into(),
                utc: "1990-01-01T17:00:00".into(),
                lat: 0.0,
                lon: 0.0,
                location: "Somewhere".into(),
            },
            western: WesternFacts {
                sun_sign: "Capricorn".into(),
                sun_deg: 10.0,
                moon_sign: "Aries".into(),
                moon_deg: 5.0,
                ascendant_sign: "Leo".into(),
                asc_deg: 20.0,
                raw: RawLongitudes {
                    sun_long: 280.0,
                    moon_long: 5.0,
                    asc_long: 140.0,
                },
            },
            chinese: ChineseFacts {
                animal: "Horse".into(),
                element: "Metal".into(),
                yin_yang: "Yang".into(),
            },
            numerology: NumerologyFacts {
                life_path: 3,
                life_path_keyword: "Creative Communicator".into(),
                expression: 1,
                expression_keyword: "Independent Leader".into(),
                soul_urge: 4,
                soul_urge_keyword: "Builder".into(),
                personality: 6,
                personality_keyword: "Nurturer".into(),
            },
            human_design: DesignFacts {
                chart_type: "Generator".into(),
                strategy: "Wait to respond".into(),
                authority: "Sacral".into(),
                profile: "1/3".into(),
                incarnation_cross: "(1/2 | 3/4)".into(),
                definition: "Split".into(),
                channels: vec![],
                gates: vec![],
            },
            mbti: "".into(),
        }
    }

    #[async_trait]
    impl FactsPipeline for StubPipeline {
        async fn compute_facts(&self, _input: &BirthInput) -> Result<FactRecord> {
            if self.fail {
                Err(BlueprintError::resolution("geocoding", "stubbed failure"))
            } else {
                Ok(stub_record())
            }
        }
    }

    fn input() -> BirthInput {
        BirthInput::parse("Stub", "1990-01-01", "12:00", "X", "Y", "").unwrap()
    }

    #[tokio::test]
    async fn engine_passes_the_record_through() {
        let engine = BlueprintEngine::new(StubPipeline { fail: false });
        let record = engine.run(&input()).await.unwrap();
        assert_eq!(record, stub_record());
    }

    #[tokio::test]
    async fn engine_propagates_pipeline_errors() {
        let engine = BlueprintEngine::new(StubPipeline { fail: true });
        let err = engine.run(&input()).await.unwrap_err();
        assert_eq!(err.kind(), "resolution");
    }
}
