//! Assembly of the Itaú issuance payload.
//!
//! Struct field names follow the bank's schema bit-for-bit. Optional blocks
//! (`juros`, `multa`, `desconto`, `lista_mensagem_cobranca`) are omitted
//! entirely when not configured; the two document fields inside
//! `tipo_pessoa` are the one place the schema wants an explicit null for
//! the unused variant.

use serde::{Deserialize, Serialize};

use boleto_types::fields::{self, ZERO_AMOUNT};
use boleto_types::{BoletoError, BoletoKind, BoletoRequest, ChargeInstrument, TitleSpecies};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Top-level issuance payload (`POST /boletos_pix`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuePayload {
    pub etapa_processo_boleto: String,
    pub beneficiario: Beneficiario,
    pub dado_boleto: DadoBoleto,
    pub dados_qrcode: DadosQrcode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beneficiario {
    pub id_beneficiario: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DadoBoleto {
    pub descricao_instrumento_cobranca: String,
    pub tipo_boleto: String,
    pub texto_seu_numero: String,
    pub codigo_carteira: String,
    pub codigo_especie: String,
    pub data_emissao: String,
    pub valor_abatimento: String,
    pub pagador: Pagador,
    pub dados_individuais_boleto: Vec<DadosIndividuaisBoleto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juros: Option<Juros>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multa: Option<Multa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desconto: Option<Desconto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lista_mensagem_cobranca: Option<Vec<Mensagem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagador {
    pub pessoa: Pessoa,
    pub endereco: Endereco,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pessoa {
    pub nome_pessoa: String,
    pub tipo_pessoa: TipoPessoa,
}

/// Exactly one of the two document fields is populated; the other is an
/// explicit null, matching the bank's schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoPessoa {
    pub codigo_tipo_pessoa: String,
    pub numero_cadastro_pessoa_fisica: Option<String>,
    pub numero_cadastro_nacional_pessoa_juridica: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endereco {
    pub nome_logradouro: String,
    pub nome_bairro: String,
    pub nome_cidade: String,
    #[serde(rename = "sigla_UF")]
    pub sigla_uf: String,
    #[serde(rename = "numero_CEP")]
    pub numero_cep: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DadosIndividuaisBoleto {
    pub numero_nosso_numero: String,
    pub data_vencimento: String,
    pub texto_uso_beneficiario: String,
    pub valor_titulo: String,
    pub data_limite_pagamento: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Juros {
    pub codigo_tipo_juros: String,
    pub valor_juros: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Multa {
    pub codigo_tipo_multa: String,
    pub percentual_multa: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Desconto {
    pub codigo_tipo_desconto: String,
    pub descontos: Vec<DescontoEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescontoEntry {
    pub data_desconto: String,
    pub valor_desconto: String,
    pub percentual_desconto: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mensagem {
    pub mensagem: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DadosQrcode {
    pub chave: String,
}

/// Builds the full issuance payload from a validated request.
///
/// Pure: no IO, no mutation of the request. Fails before assembling
/// anything when an input the type system cannot rule out is unusable,
/// never emitting a partial payload.
pub fn build_payload(request: &BoletoRequest) -> Result<IssuePayload, BoletoError> {
    let beneficiary = request.beneficiary();
    let payer = request.payer();

    if payer.name().trim().is_empty() {
        return Err(BoletoError::Payload("payer name is blank".into()));
    }
    if beneficiary.pix_key().is_empty() {
        return Err(BoletoError::Payload("beneficiary PIX key is empty".into()));
    }

    let is_individual = payer.document_type() == "F";
    let pessoa = Pessoa {
        nome_pessoa: payer.name().to_string(),
        tipo_pessoa: TipoPessoa {
            codigo_tipo_pessoa: payer.document_type().to_string(),
            numero_cadastro_pessoa_fisica: is_individual.then(|| payer.document()),
            numero_cadastro_nacional_pessoa_juridica: (!is_individual).then(|| payer.document()),
        },
    };

    let address = payer.address();
    let endereco = Endereco {
        nome_logradouro: address.street().to_string(),
        nome_bairro: address.neighborhood().to_string(),
        nome_cidade: address.city().to_string(),
        sigla_uf: address.state().to_string(),
        numero_cep: address.zip_code().to_string(),
    };

    let due_date = request.due_date().format(DATE_FORMAT).to_string();
    let individual = DadosIndividuaisBoleto {
        numero_nosso_numero: request.our_number(),
        data_vencimento: due_date.clone(),
        texto_uso_beneficiario: request.your_number().to_string(),
        valor_titulo: fields::format_amount(request.amount()),
        data_limite_pagamento: due_date,
    };

    let charge = request.charge();

    let juros = charge.and_then(|c| c.interest()).map(|interest| Juros {
        codigo_tipo_juros: interest.interest_type.code().to_string(),
        // The per-day amount is monetary even though the type is a code
        valor_juros: fields::format_amount(interest.amount_per_day),
    });

    let multa = charge.and_then(|c| c.fine()).map(|fine| Multa {
        codigo_tipo_multa: fine.fine_type.code().to_string(),
        percentual_multa: fields::format_percentage(fine.percentage),
    });

    let desconto = charge.and_then(|c| c.discount()).map(|discount| Desconto {
        codigo_tipo_desconto: discount.discount_type.code().to_string(),
        descontos: vec![DescontoEntry {
            data_desconto: discount.cutoff_date.format(DATE_FORMAT).to_string(),
            valor_desconto: fields::format_amount(discount.amount),
            percentual_desconto: fields::format_percentage(discount.percentage),
        }],
    });

    let lista_mensagem_cobranca = charge
        .filter(|c| !c.messages().is_empty())
        .map(|c| {
            c.messages()
                .iter()
                .map(|m| Mensagem {
                    mensagem: m.clone(),
                })
                .collect()
        });

    Ok(IssuePayload {
        etapa_processo_boleto: request.process_step().code().to_string(),
        beneficiario: Beneficiario {
            id_beneficiario: beneficiary.id(),
        },
        dado_boleto: DadoBoleto {
            descricao_instrumento_cobranca: ChargeInstrument::BoletoPix.code().to_string(),
            tipo_boleto: BoletoKind::AtSight.code().to_string(),
            texto_seu_numero: request.your_number().to_string(),
            codigo_carteira: beneficiary.wallet_code().code().to_string(),
            codigo_especie: TitleSpecies::MerchantDuplicate.code().to_string(),
            data_emissao: request.issue_date().format(DATE_FORMAT).to_string(),
            valor_abatimento: ZERO_AMOUNT.to_string(),
            pagador: Pagador {
                pessoa,
                endereco,
            },
            dados_individuais_boleto: vec![individual],
            juros,
            multa,
            desconto,
            lista_mensagem_cobranca,
        },
        dados_qrcode: DadosQrcode {
            chave: beneficiary.pix_key().to_string(),
        },
    })
}
