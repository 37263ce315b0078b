use std::io::Error as IoError;

use thiserror::Error;
use tonic::{
    metadata::{errors::InvalidMetadataValue, MetadataValue},
    transport::{Channel, ClientTlsConfig, Error as TransportError},
    Request, Status,
};
use tracing::{debug, instrument};
use yup_oauth2::{
    authenticator::{Authenticator, DefaultHyperClient, HyperClientBuilder},
    read_service_account_key, Error as OauthError, ServiceAccountAuthenticator,
};

use crate::{
    config::Config,
    google::{
        codegen::{
            synthesis_input::InputSource, text_to_speech_client::TextToSpeechClient, AudioConfig,
            AudioEncoding as GoogleAudioEncoding, ListVoicesRequest, SsmlVoiceGender,
            SynthesisInput, SynthesizeSpeechRequest, VoiceSelectionParams,
        },
        AUTH_SCOPE,
    },
    service::{from_config::FromConfig, SpeechBackend},
    synthesis::{AudioEncoding, SpeechSynthesisRequest, SpeechSynthesisResponse},
    voice::VoiceRecord,
};

const DOMAIN_NAME: &str = "texttospeech.googleapis.com";
const ENDPOINT: &str = "https://texttospeech.googleapis.com";

type ServiceAuthenticator = Authenticator<<DefaultHyperClient as HyperClientBuilder>::Connector>;

#[derive(Error, Debug)]
pub enum CloudTextToSpeechError {
    #[error("Application config doesn't contain GCTTS settings")]
    NoSuitableConfigFound,

    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),

    #[error("Invalid OAuth key provided: {0}")]
    InvalidOauthKey(#[from] InvalidMetadataValue),

    #[error("IO error: {0}")]
    IoError(#[from] IoError),

    #[error("Authentication error: {0}")]
    AuthenticationError(#[from] OauthError),

    #[error("Unable to call gRPC API: {0}")]
    CallError(#[from] Status),
}

impl From<AudioEncoding> for GoogleAudioEncoding {
    fn from(encoding: AudioEncoding) -> Self {
        match encoding {
            AudioEncoding::Mp3 => GoogleAudioEncoding::Mp3,
        }
    }
}

impl From<SpeechSynthesisRequest> for SynthesizeSpeechRequest {
    fn from(request: SpeechSynthesisRequest) -> Self {
        SynthesizeSpeechRequest {
            input: Some(SynthesisInput {
                input_source: Some(InputSource::Text(request.text)),
            }),
            voice: Some(VoiceSelectionParams {
                language_code: request.language_code,
                name: request.voice_name,
                ssml_gender: SsmlVoiceGender::from(request.gender).into(),
            }),
            audio_config: Some(AudioConfig {
                audio_encoding: GoogleAudioEncoding::from(request.encoding).into(),
                speaking_rate: 1.,
                pitch: 0.,
                volume_gain_db: 0.,
                // Zero lets the service use natural sample rate of selected voice.
                sample_rate_hertz: 0,
                effects_profile_id: Vec::new(),
            }),
        }
    }
}

/// Attach OAuth bearer token to a single gRPC call.
fn authorized<T>(message: T, token: &str) -> Result<Request<T>, InvalidMetadataValue> {
    let mut request = Request::new(message);

    request
        .metadata_mut()
        .insert("authorization", MetadataValue::from_str(&format!("Bearer {}", token))?);

    Ok(request)
}

/// Google Cloud Text-to-Speech gRPC client.
pub struct GoogleCloudTextToSpeech {
    authenticator: ServiceAuthenticator,
    client: TextToSpeechClient<Channel>,
}

impl GoogleCloudTextToSpeech {
    /// Connect to GCTTS endpoint.
    ///
    /// Token is requested from `authenticator` before each call, so expired tokens are refreshed.
    #[instrument(skip(authenticator), err)]
    pub async fn connect(authenticator: ServiceAuthenticator) -> Result<Self, CloudTextToSpeechError> {
        let tls_config = ClientTlsConfig::new().domain_name(DOMAIN_NAME);

        let channel = Channel::from_static(ENDPOINT)
            .tls_config(tls_config)?
            .connect()
            .await?;

        debug!("Connected to Google Cloud Text-to-Speech");

        Ok(Self {
            authenticator,
            client: TextToSpeechClient::new(channel),
        })
    }

    async fn authorize<T>(&self, message: T) -> Result<Request<T>, CloudTextToSpeechError> {
        // Authenticator keeps the token until it expires.
        let token = self.authenticator.token(&[AUTH_SCOPE]).await?;

        Ok(authorized(message, token.as_str())?)
    }
}

impl SpeechBackend for GoogleCloudTextToSpeech {
    type Error = CloudTextToSpeechError;

    #[instrument(skip(self), err)]
    async fn list_voices(&mut self) -> Result<Vec<VoiceRecord>, Self::Error> {
        let request = self
            .authorize(ListVoicesRequest {
                language_code: String::new(),
            })
            .await?;

        let response = self.client.list_voices(request).await?;

        Ok(response
            .into_inner()
            .voices
            .into_iter()
            .map(VoiceRecord::from)
            .collect())
    }

    #[instrument(skip(self, request), fields(voice = %request.voice_name), err)]
    async fn synthesize(
        &mut self,
        request: SpeechSynthesisRequest,
    ) -> Result<SpeechSynthesisResponse, Self::Error> {
        let encoding = request.encoding;

        let request = self
            .authorize(SynthesizeSpeechRequest::from(request))
            .await?;

        let response = self.client.synthesize_speech(request).await?;

        Ok(SpeechSynthesisResponse {
            encoding,
            audio: response.into_inner().audio_content,
        })
    }
}

impl<'c> FromConfig<'c> for GoogleCloudTextToSpeech
where
    Self: Sized,
{
    type Config = &'c Config;

    type Error = CloudTextToSpeechError;

    async fn from_config(config: Self::Config) -> Result<Self, Self::Error> {
        let authenticator = ServiceAccountAuthenticator::builder(
            read_service_account_key(
                &config
                    .gctts_config()
                    .as_ref()
                    .ok_or(CloudTextToSpeechError::NoSuitableConfigFound)?
                    .service_account_path,
            )
            .await?,
        )
        .build()
        .await?;

        GoogleCloudTextToSpeech::connect(authenticator).await
    }
}
