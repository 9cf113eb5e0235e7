//! Monthly batch issuance.
//!
//! One boleto per active subscriber, issued on the first day of the month
//! and due on the last. A plain iteration: scheduling the run itself is the
//! host's concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::dates::{first_day_of_month, last_day_of_month};
use crate::service::BoletoService;
use boleto_types::{
    Beneficiary, BoletoError, BoletoGateway, BoletoRequest, BoletoResponse, Charge, Fine,
    FineType, Interest, InterestType, Payer, Person, ProcessStep,
};

/// Daily interest, as a fraction of the monthly fee (0.03% per day).
const DAILY_INTEREST_RATE: f64 = 0.0003;

/// Late-payment fine percentage.
const FINE_PERCENTAGE: f64 = 2.0;

/// A party billed every month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: u64,
    pub person: Person,
    pub monthly_fee: f64,
}

/// One successfully issued boleto within a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedBoleto {
    pub subscriber_id: u64,
    pub subscriber_name: String,
    pub boleto_id: String,
    pub our_number: String,
}

/// One failed issuance within a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedBoleto {
    pub subscriber_id: u64,
    pub subscriber_name: String,
    pub error: String,
}

/// Outcome of a batch run. Failures never abort the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingReport {
    pub succeeded: Vec<IssuedBoleto>,
    pub failed: Vec<FailedBoleto>,
    pub total: usize,
}

/// Issues one boleto per subscriber for the current billing month.
pub struct MonthlyBilling<G: BoletoGateway> {
    service: BoletoService<G>,
    beneficiary: Beneficiary,
    next_our_number: u64,
}

impl<G: BoletoGateway> MonthlyBilling<G> {
    /// `first_our_number` seeds the creditor-assigned sequence; the caller
    /// persists the cursor between runs.
    pub fn new(service: BoletoService<G>, beneficiary: Beneficiary, first_our_number: u64) -> Self {
        Self {
            service,
            beneficiary,
            next_our_number: first_our_number,
        }
    }

    /// The next value the our-number sequence will hand out.
    pub fn sequence_cursor(&self) -> u64 {
        self.next_our_number
    }

    /// Runs the batch for the month containing `today`.
    #[instrument(skip(self, subscribers), fields(total = subscribers.len()))]
    pub async fn run(&mut self, subscribers: &[Subscriber], today: NaiveDate) -> BillingReport {
        info!("Starting monthly boleto generation");

        let issue_date = first_day_of_month(today);
        let due_date = last_day_of_month(today);

        let mut report = BillingReport {
            total: subscribers.len(),
            ..Default::default()
        };

        for subscriber in subscribers {
            match self.issue_one(subscriber, issue_date, due_date).await {
                Ok(response) => {
                    info!(
                        subscriber_id = subscriber.id,
                        our_number = %response.our_number,
                        "Boleto generated"
                    );
                    report.succeeded.push(IssuedBoleto {
                        subscriber_id: subscriber.id,
                        subscriber_name: subscriber.person.name().to_string(),
                        boleto_id: response.id,
                        our_number: response.our_number,
                    });
                }
                Err(e) => {
                    error!(subscriber_id = subscriber.id, error = %e, "Boleto generation failed");
                    report.failed.push(FailedBoleto {
                        subscriber_id: subscriber.id,
                        subscriber_name: subscriber.person.name().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            total = report.total,
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "Monthly generation finished"
        );
        report
    }

    /// Issues a single out-of-cycle boleto for one subscriber.
    pub async fn issue_for(
        &mut self,
        subscriber: &Subscriber,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<BoletoResponse, BoletoError> {
        self.issue_one(subscriber, issue_date, due_date).await
    }

    async fn issue_one(
        &mut self,
        subscriber: &Subscriber,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<BoletoResponse, BoletoError> {
        let request = self.build_request(subscriber, issue_date, due_date)?;
        self.service.create_boleto(&request).await
    }

    fn build_request(
        &mut self,
        subscriber: &Subscriber,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<BoletoRequest, BoletoError> {
        let our_number = self.take_our_number();
        let your_number = format!("{:06}", subscriber.id);
        let amount = subscriber.monthly_fee;

        let request = BoletoRequest::new(
            self.beneficiary.clone(),
            Payer::new(subscriber.person.clone()),
            our_number,
            your_number,
            amount,
            issue_date,
            due_date,
            Some(default_charge(amount)),
            ProcessStep::Registration,
        )?;
        Ok(request)
    }

    fn take_our_number(&mut self) -> String {
        let number = self.next_our_number % 100_000_000;
        self.next_our_number += 1;
        format!("{:08}", number)
    }
}

/// Standard charge configuration for subscription invoices.
fn default_charge(amount: f64) -> Charge {
    Charge::new(
        Some(Interest::new(
            InterestType::DailyAmount,
            amount * DAILY_INTEREST_RATE,
        )),
        Some(Fine::new(FineType::Percentage, FINE_PERCENTAGE)),
        None,
        vec![
            "Não receber após o vencimento".to_string(),
            "Juros de 0,03% ao dia após vencimento".to_string(),
            "Multa de 2% após vencimento".to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use boleto_types::{Address, GatewayError, WalletCode};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Gateway that fails for a chosen our-number and records submissions.
    #[derive(Default)]
    struct ScriptedGateway {
        fail_for: Option<String>,
        submitted: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl BoletoGateway for ScriptedGateway {
        async fn authenticate(&self) -> Result<String, GatewayError> {
            Ok("token".to_string())
        }

        async fn submit_boleto(&self, payload: &Value) -> Result<Value, GatewayError> {
            let our_number = payload["dado_boleto"]["dados_individuais_boleto"][0]
                ["numero_nosso_numero"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            if self.fail_for.as_deref() == Some(&our_number) {
                return Err(GatewayError::Api {
                    status: 422,
                    message: "boleto rejeitado".to_string(),
                });
            }
            self.submitted.lock().unwrap().push(payload.clone());
            Ok(json!({
                "data": {
                    "dado_boleto": {
                        "dados_individuais_boleto": [
                            { "numero_nosso_numero": our_number }
                        ]
                    }
                }
            }))
        }

        async fn fetch_boleto(&self, _: &str, _: &str) -> Result<Value, GatewayError> {
            Ok(Value::Null)
        }

        async fn register_webhook(&self, _: &Value) -> Result<Value, GatewayError> {
            Ok(Value::Null)
        }
    }

    fn subscriber(id: u64, fee: f64) -> Subscriber {
        let address = Address::new("Rua A", "Centro", "São Paulo", "SP", "01310-100").unwrap();
        Subscriber {
            id,
            person: Person::individual("Maria Silva", "111.444.777-35", address).unwrap(),
            monthly_fee: fee,
        }
    }

    fn billing(gateway: ScriptedGateway) -> MonthlyBilling<ScriptedGateway> {
        let beneficiary =
            Beneficiary::new("1234", "1234567", "8", "pix@empresa.com", WalletCode::Registered109)
                .unwrap();
        MonthlyBilling::new(BoletoService::new(gateway), beneficiary, 1000)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()
    }

    #[tokio::test]
    async fn test_run_issues_one_boleto_per_subscriber() {
        let mut billing = billing(ScriptedGateway::default());
        let subscribers = vec![subscriber(1, 150.0), subscriber(2, 99.9)];

        let report = billing.run(&subscribers, today()).await;
        assert_eq!(report.total, 2);
        assert_eq!(report.succeeded.len(), 2);
        assert!(report.failed.is_empty());
        assert_eq!(report.succeeded[0].our_number, "00001000");
        assert_eq!(report.succeeded[1].our_number, "00001001");
        assert_eq!(billing.sequence_cursor(), 1002);
    }

    #[tokio::test]
    async fn test_period_and_charge_defaults() {
        let mut billing = billing(ScriptedGateway::default());
        billing.run(&[subscriber(7, 200.0)], today()).await;

        let submitted = billing.service.gateway().submitted.lock().unwrap().clone();
        let payload = &submitted[0];

        assert_eq!(payload["dado_boleto"]["data_emissao"], "2026-08-01");
        let entry = &payload["dado_boleto"]["dados_individuais_boleto"][0];
        assert_eq!(entry["data_vencimento"], "2026-08-31");
        assert_eq!(entry["texto_uso_beneficiario"], "000007");

        // 0.03% of R$200.00 per day = R$0.06
        assert_eq!(payload["dado_boleto"]["juros"]["codigo_tipo_juros"], "93");
        assert_eq!(payload["dado_boleto"]["juros"]["valor_juros"], "00000000000000006");
        assert_eq!(payload["dado_boleto"]["multa"]["percentual_multa"], "000000002000");
        assert_eq!(
            payload["dado_boleto"]["lista_mensagem_cobranca"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_the_batch() {
        let gateway = ScriptedGateway {
            fail_for: Some("00001000".to_string()),
            ..Default::default()
        };
        let mut billing = billing(gateway);
        let subscribers = vec![subscriber(1, 150.0), subscriber(2, 99.9)];

        let report = billing.run(&subscribers, today()).await;
        assert_eq!(report.succeeded.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].subscriber_id, 1);
        assert!(report.failed[0].error.contains("422"));
        assert_eq!(report.succeeded[0].subscriber_id, 2);
    }

    #[tokio::test]
    async fn test_sequence_wraps_at_eight_digits() {
        let beneficiary =
            Beneficiary::new("1234", "1234567", "8", "key", WalletCode::Registered109).unwrap();
        let mut billing = MonthlyBilling::new(
            BoletoService::new(ScriptedGateway::default()),
            beneficiary,
            99_999_999,
        );

        let report = billing
            .run(&[subscriber(1, 10.0), subscriber(2, 10.0)], today())
            .await;
        assert_eq!(report.succeeded[0].our_number, "99999999");
        assert_eq!(report.succeeded[1].our_number, "00000000");
    }
}
