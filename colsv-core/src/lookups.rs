// Power-of-two decomposition tables for the shortest-round-trip double
// formatter (see dblfmt.rs). Generated offline by tools/gen_lookups.py using
// extended-precision decimal arithmetic; committed here so the crate depends
// only on 64-bit doubles at runtime. Do not hand-edit.
//
// `SIGPARTS[i] = 2^-i` for i in 1..=52, with `SIGPARTS[0] = 0.0` so the
// mantissa-bit summation loop in `dblfmt::decompose` can stay branch-free.
// `EXPSIG[i]` and `EXPPOW[i]` jointly hold `2^(i-1023)` split into a mantissa
// in `[1,10)` and a base-10 exponent, for i in 0..2048 (the full IEEE-754
// double exponent range).

pub(crate) const SIGPARTS: [f64; 53] = [
    0.0, 0.5, 0.25, 0.125,
    0.0625, 0.03125, 0.015625, 0.0078125,
    0.00390625, 0.001953125, 0.0009765625, 0.00048828125,
    0.000244140625, 0.0001220703125, 0.00006103515625, 0.000030517578125,
    0.0000152587890625, 0.00000762939453125, 0.000003814697265625, 0.0000019073486328125,
    0.00000095367431640625, 0.000000476837158203125, 0.0000002384185791015625, 0.00000011920928955078125,
    0.000000059604644775390625, 0.0000000298023223876953125, 0.00000001490116119384765625, 0.000000007450580596923828125,
    0.0000000037252902984619140625, 0.00000000186264514923095703125, 0.000000000931322574615478515625, 0.0000000004656612873077392578125,
    0.00000000023283064365386962890625, 0.000000000116415321826934814453125, 0.0000000000582076609134674072265625, 0.00000000002910383045673370361328125,
    0.000000000014551915228366851806640625, 0.0000000000072759576141834259033203125, 0.00000000000363797880709171295166015625, 0.000000000001818989403545856475830078125,
    0.0000000000009094947017729282379150390625, 0.00000000000045474735088646411895751953125, 0.000000000000227373675443232059478759765625, 0.0000000000001136868377216160297393798828125,
    0.00000000000005684341886080801486968994140625, 0.000000000000028421709430404007434844970703125, 0.0000000000000142108547152020037174224853515625, 0.00000000000000710542735760100185871124267578125,
    0.000000000000003552713678800500929355621337890625, 0.0000000000000017763568394002504646778106689453125, 0.00000000000000088817841970012523233890533447265625, 0.000000000000000444089209850062616169452667236328125,
    0.0000000000000002220446049250313080847263336181640625,
];

pub(crate) const EXPSIG: [f64; 2048] = [
    1.112536929253600691545116358666202032110, 2.225073858507201383090232717332404064219, 4.450147717014402766180465434664808128438, 8.900295434028805532360930869329616256877,
    1.780059086805761106472186173865923251375, 3.560118173611522212944372347731846502751, 7.120236347223044425888744695463693005501, 1.424047269444608885177748939092738601100,
    2.848094538889217770355497878185477202201, 5.696189077778435540710995756370954404401, 1.139237815555687108142199151274190880880, 2.278475631111374216284398302548381761760,
    4.556951262222748432568796605096763523521, 9.113902524445496865137593210193527047042, 1.822780504889099373027518642038705409408, 3.645561009778198746055037284077410818817,
    7.291122019556397492110074568154821637634, 1.458224403911279498422014913630964327527, 2.916448807822558996844029827261928655053, 5.832897615645117993688059654523857310107,
    1.166579523129023598737611930904771462021, 2.333159046258047197475223861809542924043, 4.666318092516094394950447723619085848085, 9.332636185032188789900895447238171696171,
    1.866527237006437757980179089447634339234, 3.733054474012875515960358178895268678468, 7.466108948025751031920716357790537356937, 1.493221789605150206384143271558107471387,
    2.986443579210300412768286543116214942775, 5.972887158420600825536573086232429885549, 1.194577431684120165107314617246485977110, 2.389154863368240330214629234492971954220,
    4.778309726736480660429258468985943908440, 9.556619453472961320858516937971887816879, 1.911323890694592264171703387594377563376, 3.822647781389184528343406775188755126752,
    7.645295562778369056686813550377510253503, 1.529059112555673811337362710075502050701, 3.058118225111347622674725420151004101401, 6.116236450222695245349450840302008202803,
    1.223247290044539049069890168060401640561, 2.446494580089078098139780336120803281121, 4.892989160178156196279560672241606562242, 9.785978320356312392559121344483213124484,
    1.957195664071262478511824268896642624897, 3.914391328142524957023648537793285249794, 7.828782656285049914047297075586570499587, 1.565756531257009982809459415117314099917,
    3.131513062514019965618918830234628199835, 6.263026125028039931237837660469256399670, 1.252605225005607986247567532093851279934, 2.505210450011215972495135064187702559868,
    5.010420900022431944990270128375405119736, 1.002084180004486388998054025675081023947, 2.004168360008972777996108051350162047894, 4.008336720017945555992216102700324095789,
    8.016673440035891111984432205400648191577, 1.603334688007178222396886441080129638315, 3.206669376014356444793772882160259276631, 6.413338752028712889587545764320518553262,
    1.282667750405742577917509152864103710652, 2.565335500811485155835018305728207421305, 5.130671001622970311670036611456414842610, 1.026134200324594062334007322291282968522,
    2.052268400649188124668014644582565937044, 4.104536801298376249336029289165131874088, 8.209073602596752498672058578330263748175, 1.641814720519350499734411715666052749635,
    3.283629441038700999468823431332105499270, 6.567258882077401998937646862664210998540, 1.313451776415480399787529372532842199708, 2.626903552830960799575058745065684399416,
    5.253807105661921599150117490131368798832, 1.050761421132384319830023498026273759766, 2.101522842264768639660046996052547519533, 4.203045684529537279320093992105095039066,
    8.406091369059074558640187984210190078131, 1.681218273811814911728037596842038015626, 3.362436547623629823456075193684076031253, 6.724873095247259646912150387368152062505,
    1.344974619049451929382430077473630412501, 2.689949238098903858764860154947260825002, 5.379898476197807717529720309894521650004, 1.075979695239561543505944061978904330001,
    2.151959390479123087011888123957808660002, 4.303918780958246174023776247915617320003, 8.607837561916492348047552495831234640007, 1.721567512383298469609510499166246928001,
    3.443135024766596939219020998332493856003, 6.886270049533193878438041996664987712005, 1.377254009906638775687608399332997542401, 2.754508019813277551375216798665995084802,
    5.509016039626555102750433597331990169604, 1.101803207925311020550086719466398033921, 2.203606415850622041100173438932796067842, 4.407212831701244082200346877865592135683,
    8.814425663402488164400693755731184271367, 1.762885132680497632880138751146236854273, 3.525770265360995265760277502292473708547, 7.051540530721990531520555004584947417093,
    1.410308106144398106304111000916989483419, 2.820616212288796212608222001833978966837, 5.641232424577592425216444003667957933675, 1.128246484915518485043288800733591586735,
    2.256492969831036970086577601467183173470, 4.512985939662073940173155202934366346940, 9.025971879324147880346310405868732693880, 1.805194375864829576069262081173746538776,
    3.610388751729659152138524162347493077552, 7.220777503459318304277048324694986155104, 1.444155500691863660855409664938997231021, 2.888311001383727321710819329877994462041,
    5.776622002767454643421638659755988924083, 1.155324400553490928684327731951197784817, 2.310648801106981857368655463902395569633, 4.621297602213963714737310927804791139266,
    9.242595204427927429474621855609582278533, 1.848519040885585485894924371121916455707, 3.697038081771170971789848742243832911413, 7.394076163542341943579697484487665822826,
    1.478815232708468388715939496897533164565, 2.957630465416936777431878993795066329130, 5.915260930833873554863757987590132658261, 1.183052186166774710972751597518026531652,
    2.366104372333549421945503195036053063304, 4.732208744667098843891006390072106126609, 9.464417489334197687782012780144212253217, 1.892883497866839537556402556028842450643,
    3.785766995733679075112805112057684901287, 7.571533991467358150225610224115369802574, 1.514306798293471630045122044823073960515, 3.028613596586943260090244089646147921030,
    6.057227193173886520180488179292295842059, 1.211445438634777304036097635858459168412, 2.422890877269554608072195271716918336824, 4.845781754539109216144390543433836673647,
    9.691563509078218432288781086867673347295, 1.938312701815643686457756217373534669459, 3.876625403631287372915512434747069338918, 7.753250807262574745831024869494138677836,
    1.550650161452514949166204973898827735567, 3.101300322905029898332409947797655471134, 6.202600645810059796664819895595310942269, 1.240520129162011959332963979119062188454,
    2.481040258324023918665927958238124376907, 4.962080516648047837331855916476248753815, 9.924161033296095674663711832952497507630, 1.984832206659219134932742366590499501526,
    3.969664413318438269865484733180999003052, 7.939328826636876539730969466361998006104, 1.587865765327375307946193893272399601221, 3.175731530654750615892387786544799202442,
    6.351463061309501231784775573089598404883, 1.270292612261900246356955114617919680977, 2.540585224523800492713910229235839361953, 5.081170449047600985427820458471678723906,
    1.016234089809520197085564091694335744781, 2.032468179619040394171128183388671489563, 4.064936359238080788342256366777342979125, 8.129872718476161576684512733554685958250,
    1.625974543695232315336902546710937191650, 3.251949087390464630673805093421874383300, 6.503898174780929261347610186843748766600, 1.300779634956185852269522037368749753320,
    2.601559269912371704539044074737499506640, 5.203118539824743409078088149474999013280, 1.040623707964948681815617629894999802656, 2.081247415929897363631235259789999605312,
    4.162494831859794727262470519579999210624, 8.324989663719589454524941039159998421248, 1.664997932743917890904988207831999684250, 3.329995865487835781809976415663999368499,
    6.659991730975671563619952831327998736999, 1.331998346195134312723990566265599747400, 2.663996692390268625447981132531199494799, 5.327993384780537250895962265062398989599,
    1.065598676956107450179192453012479797920, 2.131197353912214900358384906024959595840, 4.262394707824429800716769812049919191679, 8.524789415648859601433539624099838383358,
    1.704957883129771920286707924819967676672, 3.409915766259543840573415849639935353343, 6.819831532519087681146831699279870706687, 1.363966306503817536229366339855974141337,
    2.727932613007635072458732679711948282675, 5.455865226015270144917465359423896565349, 1.091173045203054028983493071884779313070, 2.182346090406108057966986143769558626140,
    4.364692180812216115933972287539117252279, 8.729384361624432231867944575078234504559, 1.745876872324886446373588915015646900912, 3.491753744649772892747177830031293801824,
    6.983507489299545785494355660062587603647, 1.396701497859909157098871132012517520729, 2.793402995719818314197742264025035041459, 5.586805991439636628395484528050070082918,
    1.117361198287927325679096905610014016584, 2.234722396575854651358193811220028033167, 4.469444793151709302716387622440056066334, 8.938889586303418605432775244880112132668,
    1.787777917260683721086555048976022426534, 3.575555834521367442173110097952044853067, 7.151111669042734884346220195904089706135, 1.430222333808546976869244039180817941227,
    2.860444667617093953738488078361635882454, 5.720889335234187907476976156723271764908, 1.144177867046837581495395231344654352982, 2.288355734093675162990790462689308705963,
    4.576711468187350325981580925378617411926, 9.153422936374700651963161850757234823852, 1.830684587274940130392632370151446964770, 3.661369174549880260785264740302893929541,
    7.322738349099760521570529480605787859082, 1.464547669819952104314105896121157571816, 2.929095339639904208628211792242315143633, 5.858190679279808417256423584484630287265,
    1.171638135855961683451284716896926057453, 2.343276271711923366902569433793852114906, 4.686552543423846733805138867587704229812, 9.373105086847693467610277735175408459625,
    1.874621017369538693522055547035081691925, 3.749242034739077387044111094070163383850, 7.498484069478154774088222188140326767700, 1.499696813895630954817644437628065353540,
    2.999393627791261909635288875256130707080, 5.998787255582523819270577750512261414160, 1.199757451116504763854115550102452282832, 2.399514902233009527708231100204904565664,
    4.799029804466019055416462200409809131328, 9.598059608932038110832924400819618262656, 1.919611921786407622166584880163923652531, 3.839223843572815244333169760327847305062,
    7.678447687145630488666339520655694610125, 1.535689537429126097733267904131138922025, 3.071379074858252195466535808262277844050, 6.142758149716504390933071616524555688100,
    1.228551629943300878186614323304911137620, 2.457103259886601756373228646609822275240, 4.914206519773203512746457293219644550480, 9.828413039546407025492914586439289100959,
    1.965682607909281405098582917287857820192, 3.931365215818562810197165834575715640384, 7.862730431637125620394331669151431280768, 1.572546086327425124078866333830286256154,
    3.145092172654850248157732667660572512307, 6.290184345309700496315465335321145024614, 1.258036869061940099263093067064229004923, 2.516073738123880198526186134128458009846,
    5.032147476247760397052372268256916019691, 1.006429495249552079410474453651383203938, 2.012858990499104158820948907302766407877, 4.025717980998208317641897814605532815753,
    8.051435961996416635283795629211065631506, 1.610287192399283327056759125842213126301, 3.220574384798566654113518251684426252602, 6.441148769597133308227036503368852505205,
    1.288229753919426661645407300673770501041, 2.576459507838853323290814601347541002082, 5.152919015677706646581629202695082004164, 1.030583803135541329316325840539016400833,
    2.061167606271082658632651681078032801666, 4.122335212542165317265303362156065603331, 8.244670425084330634530606724312131206662, 1.648934085016866126906121344862426241332,
    3.297868170033732253812242689724852482665, 6.595736340067464507624485379449704965330, 1.319147268013492901524897075889940993066, 2.638294536026985803049794151779881986132,
    5.276589072053971606099588303559763972264, 1.055317814410794321219917660711952794453, 2.110635628821588642439835321423905588906, 4.221271257643177284879670642847811177811,
    8.442542515286354569759341285695622355622, 1.688508503057270913951868257139124471124, 3.377017006114541827903736514278248942249, 6.754034012229083655807473028556497884498,
    1.350806802445816731161494605711299576900, 2.701613604891633462322989211422599153799, 5.403227209783266924645978422845198307598, 1.080645441956653384929195684569039661520,
    2.161290883913306769858391369138079323039, 4.322581767826613539716782738276158646078, 8.645163535653227079433565476552317292157, 1.729032707130645415886713095310463458431,
    3.458065414261290831773426190620926916863, 6.916130828522581663546852381241853833726, 1.383226165704516332709370476248370766745, 2.766452331409032665418740952496741533490,
    5.532904662818065330837481904993483066980, 1.106580932563613066167496380998696613396, 2.213161865127226132334992761997393226792, 4.426323730254452264669985523994786453584,
    8.852647460508904529339971047989572907169, 1.770529492101780905867994209597914581434, 3.541058984203561811735988419195829162867, 7.082117968407123623471976838391658325735,
    1.416423593681424724694395367678331665147, 2.832847187362849449388790735356663330294, 5.665694374725698898777581470713326660588, 1.133138874945139779755516294142665332118,
    2.266277749890279559511032588285330664235, 4.532555499780559119022065176570661328470, 9.065110999561118238044130353141322656941, 1.813022199912223647608826070628264531388,
    3.626044399824447295217652141256529062776, 7.252088799648894590435304282513058125553, 1.450417759929778918087060856502611625111, 2.900835519859557836174121713005223250221,
    5.801671039719115672348243426010446500442, 1.160334207943823134469648685202089300088, 2.320668415887646268939297370404178600177, 4.641336831775292537878594740808357200354,
    9.282673663550585075757189481616714400707, 1.856534732710117015151437896323342880141, 3.713069465420234030302875792646685760283, 7.426138930840468060605751585293371520566,
    1.485227786168093612121150317058674304113, 2.970455572336187224242300634117348608226, 5.940911144672374448484601268234697216453, 1.188182228934474889696920253646939443291,
    2.376364457868949779393840507293878886581, 4.752728915737899558787681014587757773162, 9.505457831475799117575362029175515546324, 1.901091566295159823515072405835103109265,
    3.802183132590319647030144811670206218530, 7.604366265180639294060289623340412437059, 1.520873253036127858812057924668082487412, 3.041746506072255717624115849336164974824,
    6.083493012144511435248231698672329949648, 1.216698602428902287049646339734465989930, 2.433397204857804574099292679468931979859, 4.866794409715609148198585358937863959718,
    9.733588819431218296397170717875727919436, 1.946717763886243659279434143575145583887, 3.893435527772487318558868287150291167774, 7.786871055544974637117736574300582335549,
    1.557374211108994927423547314860116467110, 3.114748422217989854847094629720232934220, 6.229496844435979709694189259440465868439, 1.245899368887195941938837851888093173688,
    2.491798737774391883877675703776186347376, 4.983597475548783767755351407552372694751, 9.967194951097567535510702815104745389503, 1.993438990219513507102140563020949077901,
    3.986877980439027014204281126041898155801, 7.973755960878054028408562252083796311602, 1.594751192175610805681712450416759262320, 3.189502384351221611363424900833518524641,
    6.379004768702443222726849801667037049282, 1.275800953740488644545369960333407409856, 2.551601907480977289090739920666814819713, 5.103203814961954578181479841333629639425,
    1.020640762992390915636295968266725927885, 2.041281525984781831272591936533451855770, 4.082563051969563662545183873066903711540, 8.165126103939127325090367746133807423081,
    1.633025220787825465018073549226761484616, 3.266050441575650930036147098453522969232, 6.532100883151301860072294196907045938464, 1.306420176630260372014458839381409187693,
    2.612840353260520744028917678762818375386, 5.225680706521041488057835357525636750772, 1.045136141304208297611567071505127350154, 2.090272282608416595223134143010254700309,
    4.180544565216833190446268286020509400617, 8.361089130433666380892536572041018801234, 1.672217826086733276178507314408203760247, 3.344435652173466552357014628816407520494,
    6.688871304346933104714029257632815040988, 1.337774260869386620942805851526563008198, 2.675548521738773241885611703053126016395, 5.351097043477546483771223406106252032790,
    1.070219408695509296754244681221250406558, 2.140438817391018593508489362442500813116, 4.280877634782037187016978724885001626232, 8.561755269564074374033957449770003252464,
    1.712351053912814874806791489954000650493, 3.424702107825629749613582979908001300986, 6.849404215651259499227165959816002601971, 1.369880843130251899845433191963200520394,
    2.739761686260503799690866383926401040789, 5.479523372521007599381732767852802081577, 1.095904674504201519876346553570560416315, 2.191809349008403039752693107141120832631,
    4.383618698016806079505386214282241665262, 8.767237396033612159010772428564483330523, 1.753447479206722431802154485712896666105, 3.506894958413444863604308971425793332209,
    7.013789916826889727208617942851586664419, 1.402757983365377945441723588570317332884, 2.805515966730755890883447177140634665767, 5.611031933461511781766894354281269331535,
    1.122206386692302356353378870856253866307, 2.244412773384604712706757741712507732614, 4.488825546769209425413515483425015465228, 8.977651093538418850827030966850030930456,
    1.795530218707683770165406193370006186091, 3.591060437415367540330812386740012372182, 7.182120874830735080661624773480024744365, 1.436424174966147016132324954696004948873,
    2.872848349932294032264649909392009897746, 5.745696699864588064529299818784019795492, 1.149139339972917612905859963756803959098, 2.298278679945835225811719927513607918197,
    4.596557359891670451623439855027215836393, 9.193114719783340903246879710054431672787, 1.838622943956668180649375942010886334557, 3.677245887913336361298751884021772669115,
    7.354491775826672722597503768043545338229, 1.470898355165334544519500753608709067646, 2.941796710330669089039001507217418135292, 5.883593420661338178078003014434836270584,
    1.176718684132267635615600602886967254117, 2.353437368264535271231201205773934508233, 4.706874736529070542462402411547869016467, 9.413749473058141084924804823095738032934,
    1.882749894611628216984960964619147606587, 3.765499789223256433969921929238295213173, 7.530999578446512867939843858476590426347, 1.506199915689302573587968771695318085269,
    3.012399831378605147175937543390636170539, 6.024799662757210294351875086781272341078, 1.204959932551442058870375017356254468216, 2.409919865102884117740750034712508936431,
    4.819839730205768235481500069425017872862, 9.639679460411536470963000138850035745724, 1.927935892082307294192600027770007149145, 3.855871784164614588385200055540014298290,
    7.711743568329229176770400111080028596579, 1.542348713665845835354080022216005719316, 3.084697427331691670708160044432011438632, 6.169394854663383341416320088864022877263,
    1.233878970932676668283264017772804575453, 2.467757941865353336566528035545609150905, 4.935515883730706673133056071091218301811, 9.871031767461413346266112142182436603621,
    1.974206353492282669253222428436487320724, 3.948412706984565338506444856872974641449, 7.896825413969130677012889713745949282897, 1.579365082793826135402577942749189856579,
    3.158730165587652270805155885498379713159, 6.317460331175304541610311770996759426318, 1.263492066235060908322062354199351885264, 2.526984132470121816644124708398703770527,
    5.053968264940243633288249416797407541054, 1.010793652988048726657649883359481508211, 2.021587305976097453315299766718963016422, 4.043174611952194906630599533437926032843,
    8.086349223904389813261199066875852065687, 1.617269844780877962652239813375170413137, 3.234539689561755925304479626750340826275, 6.469079379123511850608959253500681652549,
    1.293815875824702370121791850700136330510, 2.587631751649404740243583701400272661020, 5.175263503298809480487167402800545322039, 1.035052700659761896097433480560109064408,
    2.070105401319523792194866961120218128816, 4.140210802639047584389733922240436257632, 8.280421605278095168779467844480872515263, 1.656084321055619033755893568896174503053,
    3.312168642111238067511787137792349006105, 6.624337284222476135023574275584698012211, 1.324867456844495227004714855116939602442, 2.649734913688990454009429710233879204884,
    5.299469827377980908018859420467758409768, 1.059893965475596181603771884093551681954, 2.119787930951192363207543768187103363907, 4.239575861902384726415087536374206727815,
    8.479151723804769452830175072748413455629, 1.695830344760953890566035014549682691126, 3.391660689521907781132070029099365382252, 6.783321379043815562264140058198730764504,
    1.356664275808763112452828011639746152901, 2.713328551617526224905656023279492305801, 5.426657103235052449811312046558984611603, 1.085331420647010489962262409311796922321,
    2.170662841294020979924524818623593844641, 4.341325682588041959849049637247187689282, 8.682651365176083919698099274494375378565, 1.736530273035216783939619854898875075713,
    3.473060546070433567879239709797750151426, 6.946121092140867135758479419595500302852, 1.389224218428173427151695883919100060570, 2.778448436856346854303391767838200121141,
    5.556896873712693708606783535676400242281, 1.111379374742538741721356707135280048456, 2.222758749485077483442713414270560096913, 4.445517498970154966885426828541120193825,
    8.891034997940309933770853657082240387650, 1.778206999588061986754170731416448077530, 3.556413999176123973508341462832896155060, 7.112827998352247947016682925665792310120,
    1.422565599670449589403336585133158462024, 2.845131199340899178806673170266316924048, 5.690262398681798357613346340532633848096, 1.138052479736359671522669268106526769619,
    2.276104959472719343045338536213053539238, 4.552209918945438686090677072426107078477, 9.104419837890877372181354144852214156954, 1.820883967578175474436270828970442831391,
    3.641767935156350948872541657940885662781, 7.283535870312701897745083315881771325563, 1.456707174062540379549016663176354265113, 2.913414348125080759098033326352708530225,
    5.826828696250161518196066652705417060450, 1.165365739250032303639213330541083412090, 2.330731478500064607278426661082166824180, 4.661462957000129214556853322164333648360,
    9.322925914000258429113706644328667296721, 1.864585182800051685822741328865733459344, 3.729170365600103371645482657731466918688, 7.458340731200206743290965315462933837376,
    1.491668146240041348658193063092586767475, 2.983336292480082697316386126185173534951, 5.966672584960165394632772252370347069901, 1.193334516992033078926554450474069413980,
    2.386669033984066157853108900948138827960, 4.773338067968132315706217801896277655921, 9.546676135936264631412435603792555311842, 1.909335227187252926282487120758511062368,
    3.818670454374505852564974241517022124737, 7.637340908749011705129948483034044249474, 1.527468181749802341025989696606808849895, 3.054936363499604682051979393213617699789,
    6.109872726999209364103958786427235399579, 1.221974545399841872820791757285447079916, 2.443949090799683745641583514570894159832, 4.887898181599367491283167029141788319663,
    9.775796363198734982566334058283576639326, 1.955159272639746996513266811656715327865, 3.910318545279493993026533623313430655730, 7.820637090558987986053067246626861311461,
    1.564127418111797597210613449325372262292, 3.128254836223595194421226898650744524584, 6.256509672447190388842453797301489049169, 1.251301934489438077768490759460297809834,
    2.502603868978876155536981518920595619667, 5.005207737957752311073963037841191239335, 1.001041547591550462214792607568238247867, 2.002083095183100924429585215136476495734,
    4.004166190366201848859170430272952991468, 8.008332380732403697718340860545905982936, 1.601666476146480739543668172109181196587, 3.203332952292961479087336344218362393174,
    6.406665904585922958174672688436724786349, 1.281333180917184591634934537687344957270, 2.562666361834369183269869075374689914539, 5.125332723668738366539738150749379829079,
    1.025066544733747673307947630149875965816, 2.050133089467495346615895260299751931632, 4.100266178934990693231790520599503863263, 8.200532357869981386463581041199007726526,
    1.640106471573996277292716208239801545305, 3.280212943147992554585432416479603090611, 6.560425886295985109170864832959206181221, 1.312085177259197021834172966591841236244,
    2.624170354518394043668345933183682472488, 5.248340709036788087336691866367364944977, 1.049668141807357617467338373273472988995, 2.099336283614715234934676746546945977991,
    4.198672567229430469869353493093891955982, 8.397345134458860939738706986187783911963, 1.679469026891772187947741397237556782393, 3.358938053783544375895482794475113564785,
    6.717876107567088751790965588950227129570, 1.343575221513417750358193117790045425914, 2.687150443026835500716386235580090851828, 5.374300886053671001432772471160181703656,
    1.074860177210734200286554494232036340731, 2.149720354421468400573108988464072681463, 4.299440708842936801146217976928145362925, 8.598881417685873602292435953856290725850,
    1.719776283537174720458487190771258145170, 3.439552567074349440916974381542516290340, 6.879105134148698881833948763085032580680, 1.375821026829739776366789752617006516136,
    2.751642053659479552733579505234013032272, 5.503284107318959105467159010468026064544, 1.100656821463791821093431802093605212909, 2.201313642927583642186863604187210425818,
    4.402627285855167284373727208374420851635, 8.805254571710334568747454416748841703271, 1.761050914342066913749490883349768340654, 3.522101828684133827498981766699536681308,
    7.044203657368267654997963533399073362616, 1.408840731473653530999592706679814672523, 2.817681462947307061999185413359629345047, 5.635362925894614123998370826719258690093,
    1.127072585178922824799674165343851738019, 2.254145170357845649599348330687703476037, 4.508290340715691299198696661375406952075, 9.016580681431382598397393322750813904149,
    1.803316136286276519679478664550162780830, 3.606632272572553039358957329100325561660, 7.213264545145106078717914658200651123319, 1.442652909029021215743582931640130224664,
    2.885305818058042431487165863280260449328, 5.770611636116084862974331726560520898655, 1.154122327223216972594866345312104179731, 2.308244654446433945189732690624208359462,
    4.616489308892867890379465381248416718924, 9.232978617785735780758930762496833437849, 1.846595723557147156151786152499366687570, 3.693191447114294312303572304998733375139,
    7.386382894228588624607144609997466750279, 1.477276578845717724921428921999493350056, 2.954553157691435449842857843998986700112, 5.909106315382870899685715687997973400223,
    1.181821263076574179937143137599594680045, 2.363642526153148359874286275199189360089, 4.727285052306296719748572550398378720178, 9.454570104612593439497145100796757440357,
    1.890914020922518687899429020159351488071, 3.781828041845037375798858040318702976143, 7.563656083690074751597716080637405952286, 1.512731216738014950319543216127481190457,
    3.025462433476029900639086432254962380914, 6.050924866952059801278172864509924761828, 1.210184973390411960255634572901984952366, 2.420369946780823920511269145803969904731,
    4.840739893561647841022538291607939809463, 9.681479787123295682045076583215879618926, 1.936295957424659136409015316643175923785, 3.872591914849318272818030633286351847570,
    7.745183829698636545636061266572703695140, 1.549036765939727309127212253314540739028, 3.098073531879454618254424506629081478056, 6.196147063758909236508849013258162956112,
    1.239229412751781847301769802651632591222, 2.478458825503563694603539605303265182445, 4.956917651007127389207079210606530364890, 9.913835302014254778414158421213060729780,
    1.982767060402850955682831684242612145956, 3.965534120805701911365663368485224291912, 7.931068241611403822731326736970448583824, 1.586213648322280764546265347394089716765,
    3.172427296644561529092530694788179433530, 6.344854593289123058185061389576358867059, 1.268970918657824611637012277915271773412, 2.537941837315649223274024555830543546824,
    5.075883674631298446548049111661087093647, 1.015176734926259689309609822332217418729, 2.030353469852519378619219644664434837459, 4.060706939705038757238439289328869674918,
    8.121413879410077514476878578657739349836, 1.624282775882015502895375715731547869967, 3.248565551764031005790751431463095739934, 6.497131103528062011581502862926191479868,
    1.299426220705612402316300572585238295974, 2.598852441411224804632601145170476591947, 5.197704882822449609265202290340953183895, 1.039540976564489921853040458068190636779,
    2.079081953128979843706080916136381273558, 4.158163906257959687412161832272762547116, 8.316327812515919374824323664545525094232, 1.663265562503183874964864732909105018846,
    3.326531125006367749929729465818210037693, 6.653062250012735499859458931636420075385, 1.330612450002547099971891786327284015077, 2.661224900005094199943783572654568030154,
    5.322449800010188399887567145309136060308, 1.064489960002037679977513429061827212062, 2.128979920004075359955026858123654424123, 4.257959840008150719910053716247308848247,
    8.515919680016301439820107432494617696493, 1.703183936003260287964021486498923539299, 3.406367872006520575928042972997847078597, 6.812735744013041151856085945995694157195,
    1.362547148802608230371217189199138831439, 2.725094297605216460742434378398277662878, 5.450188595210432921484868756796555325756, 1.090037719042086584296973751359311065151,
    2.180075438084173168593947502718622130302, 4.360150876168346337187895005437244260605, 8.720301752336692674375790010874488521209, 1.744060350467338534875158002174897704242,
    3.488120700934677069750316004349795408484, 6.976241401869354139500632008699590816967, 1.395248280373870827900126401739918163393, 2.790496560747741655800252803479836326787,
    5.580993121495483311600505606959672653574, 1.116198624299096662320101121391934530715, 2.232397248598193324640202242783869061430, 4.464794497196386649280404485567738122859,
    8.929588994392773298560808971135476245718, 1.785917798878554659712161794227095249144, 3.571835597757109319424323588454190498287, 7.143671195514218638848647176908380996574,
    1.428734239102843727769729435381676199315, 2.857468478205687455539458870763352398630, 5.714936956411374911078917741526704797260, 1.142987391282274982215783548305340959452,
    2.285974782564549964431567096610681918904, 4.571949565129099928863134193221363837808, 9.143899130258199857726268386442727675615, 1.828779826051639971545253677288545535123,
    3.657559652103279943090507354577091070246, 7.315119304206559886181014709154182140492, 1.463023860841311977236202941830836428098, 2.926047721682623954472405883661672856197,
    5.852095443365247908944811767323345712394, 1.170419088673049581788962353464669142479, 2.340838177346099163577924706929338284958, 4.681676354692198327155849413858676569915,
    9.363352709384396654311698827717353139830, 1.872670541876879330862339765543470627966, 3.745341083753758661724679531086941255932, 7.490682167507517323449359062173882511864,
    1.498136433501503464689871812434776502373, 2.996272867003006929379743624869553004746, 5.992545734006013858759487249739106009491, 1.198509146801202771751897449947821201898,
    2.397018293602405543503794899895642403796, 4.794036587204811087007589799791284807593, 9.588073174409622174015179599582569615186, 1.917614634881924434803035919916513923037,
    3.835229269763848869606071839833027846074, 7.670458539527697739212143679666055692149, 1.534091707905539547842428735933211138430, 3.068183415811079095684857471866422276860,
    6.136366831622158191369714943732844553719, 1.227273366324431638273942988746568910744, 2.454546732648863276547885977493137821488, 4.909093465297726553095771954986275642975,
    9.818186930595453106191543909972551285950, 1.963637386119090621238308781994510257190, 3.927274772238181242476617563989020514380, 7.854549544476362484953235127978041028760,
    1.570909908895272496990647025595608205752, 3.141819817790544993981294051191216411504, 6.283639635581089987962588102382432823008, 1.256727927116217997592517620476486564602,
    2.513455854232435995185035240952973129203, 5.026911708464871990370070481905946258407, 1.005382341692974398074014096381189251681, 2.010764683385948796148028192762378503363,
    4.021529366771897592296056385524757006725, 8.043058733543795184592112771049514013451, 1.608611746708759036918422554209902802690, 3.217223493417518073836845108419805605380,
    6.434446986835036147673690216839611210760, 1.286889397367007229534738043367922242152, 2.573778794734014459069476086735844484304, 5.147557589468028918138952173471688968608,
    1.029511517893605783627790434694337793722, 2.059023035787211567255580869388675587443, 4.118046071574423134511161738777351174887, 8.236092143148846269022323477554702349773,
    1.647218428629769253804464695510940469955, 3.294436857259538507608929391021880939909, 6.588873714519077015217858782043761879819, 1.317774742903815403043571756408752375964,
    2.635549485807630806087143512817504751927, 5.271098971615261612174287025635009503855, 1.054219794323052322434857405127001900771, 2.108439588646104644869714810254003801542,
    4.216879177292209289739429620508007603084, 8.433758354584418579478859241016015206168, 1.686751670916883715895771848203203041234, 3.373503341833767431791543696406406082467,
    6.747006683667534863583087392812812164934, 1.349401336733506972716617478562562432987, 2.698802673467013945433234957125124865974, 5.397605346934027890866469914250249731948,
    1.079521069386805578173293982850049946390, 2.159042138773611156346587965700099892779, 4.318084277547222312693175931400199785558, 8.636168555094444625386351862800399571116,
    1.727233711018888925077270372560079914223, 3.454467422037777850154540745120159828446, 6.908934844075555700309081490240319656893, 1.381786968815111140061816298048063931379,
    2.763573937630222280123632596096127862757, 5.527147875260444560247265192192255725514, 1.105429575052088912049453038438451145103, 2.210859150104177824098906076876902290206,
    4.421718300208355648197812153753804580411, 8.843436600416711296395624307507609160823, 1.768687320083342259279124861501521832165, 3.537374640166684518558249723003043664329,
    7.074749280333369037116499446006087328658, 1.414949856066673807423299889201217465732, 2.829899712133347614846599778402434931463, 5.659799424266695229693199556804869862927,
    1.131959884853339045938639911360973972585, 2.263919769706678091877279822721947945171, 4.527839539413356183754559645443895890341, 9.055679078826712367509119290887791780683,
    1.811135815765342473501823858177558356137, 3.622271631530684947003647716355116712273, 7.244543263061369894007295432710233424546, 1.448908652612273978801459086542046684909,
    2.897817305224547957602918173084093369818, 5.795634610449095915205836346168186739637, 1.159126922089819183041167269233637347927, 2.318253844179638366082334538467274695855,
    4.636507688359276732164669076934549391709, 9.273015376718553464329338153869098783419, 1.854603075343710692865867630773819756684, 3.709206150687421385731735261547639513368,
    7.418412301374842771463470523095279026735, 1.483682460274968554292694104619055805347, 2.967364920549937108585388209238111610694, 5.934729841099874217170776418476223221388,
    1.186945968219974843434155283695244644278, 2.373891936439949686868310567390489288555, 4.747783872879899373736621134780978577110, 9.495567745759798747473242269561957154221,
    1.899113549151959749494648453912391430844, 3.798227098303919498989296907824782861688, 7.596454196607838997978593815649565723377, 1.519290839321567799595718763129913144675,
    3.038581678643135599191437526259826289351, 6.077163357286271198382875052519652578701, 1.215432671457254239676575010503930515740, 2.430865342914508479353150021007861031481,
    4.861730685829016958706300042015722062961, 9.723461371658033917412600084031444125922, 1.944692274331606783482520016806288825184, 3.889384548663213566965040033612577650369,
    7.778769097326427133930080067225155300738, 1.555753819465285426786016013445031060148, 3.111507638930570853572032026890062120295, 6.223015277861141707144064053780124240590,
    1.244603055572228341428812810756024848118, 2.489206111144456682857625621512049696236, 4.978412222288913365715251243024099392472, 9.956824444577826731430502486048198784944,
    1.991364888915565346286100497209639756989, 3.982729777831130692572200994419279513978, 7.965459555662261385144401988838559027956, 1.593091911132452277028880397767711805591,
    3.186183822264904554057760795535423611182, 6.372367644529809108115521591070847222364, 1.274473528905961821623104318214169444473, 2.548947057811923643246208636428338888946,
    5.097894115623847286492417272856677777892, 1.019578823124769457298483454571335555578, 2.039157646249538914596966909142671111157, 4.078315292499077829193933818285342222313,
    8.156630584998155658387867636570684444626, 1.631326116999631131677573527314136888925, 3.262652233999262263355147054628273777851, 6.525304467998524526710294109256547555701,
    1.305060893599704905342058821851309511140, 2.610121787199409810684117643702619022280, 5.220243574398819621368235287405238044561, 1.044048714879763924273647057481047608912,
    2.088097429759527848547294114962095217824, 4.176194859519055697094588229924190435649, 8.352389719038111394189176459848380871297, 1.670477943807622278837835291969676174259,
    3.340955887615244557675670583939352348519, 6.681911775230489115351341167878704697038, 1.336382355046097823070268233575740939408, 2.672764710092195646140536467151481878815,
    5.345529420184391292281072934302963757630, 1.069105884036878258456214586860592751526, 2.138211768073756516912429173721185503052, 4.276423536147513033824858347442371006104,
    8.552847072295026067649716694884742012209, 1.710569414459005213529943338976948402442, 3.421138828918010427059886677953896804883, 6.842277657836020854119773355907793609767,
    1.368455531567204170823954671181558721953, 2.736911063134408341647909342363117443907, 5.473822126268816683295818684726234887814, 1.094764425253763336659163736945246977563,
    2.189528850507526673318327473890493955125, 4.379057701015053346636654947780987910251, 8.758115402030106693273309895561975820502, 1.751623080406021338654661979112395164100,
    3.503246160812042677309323958224790328201, 7.006492321624085354618647916449580656401, 1.401298464324817070923729583289916131280, 2.802596928649634141847459166579832262561,
    5.605193857299268283694918333159664525121, 1.121038771459853656738983666631932905024, 2.242077542919707313477967333263865810048, 4.484155085839414626955934666527731620097,
    8.968310171678829253911869333055463240194, 1.793662034335765850782373866611092648039, 3.587324068671531701564747733222185296077, 7.174648137343063403129495466444370592155,
    1.434929627468612680625899093288874118431, 2.869859254937225361251798186577748236862, 5.739718509874450722503596373155496473724, 1.147943701974890144500719274631099294745,
    2.295887403949780289001438549262198589490, 4.591774807899560578002877098524397178979, 9.183549615799121156005754197048794357958, 1.836709923159824231201150839409758871592,
    3.673419846319648462402301678819517743183, 7.346839692639296924804603357639035486367, 1.469367938527859384960920671527807097273, 2.938735877055718769921841343055614194547,
    5.877471754111437539843682686111228389093, 1.175494350822287507968736537222245677819, 2.350988701644575015937473074444491355637, 4.701977403289150031874946148888982711275,
    9.403954806578300063749892297777965422549, 1.880790961315660012749978459555593084510, 3.761581922631320025499956919111186169020, 7.523163845262640050999913838222372338039,
    1.504632769052528010199982767644474467608, 3.009265538105056020399965535288948935216, 6.018531076210112040799931070577897870432, 1.203706215242022408159986214115579574086,
    2.407412430484044816319972428231159148173, 4.814824860968089632639944856462318296345, 9.629649721936179265279889712924636592691, 1.925929944387235853055977942584927318538,
    3.851859888774471706111955885169854637076, 7.703719777548943412223911770339709274152, 1.540743955509788682444782354067941854830, 3.081487911019577364889564708135883709661,
    6.162975822039154729779129416271767419322, 1.232595164407830945955825883254353483864, 2.465190328815661891911651766508706967729, 4.930380657631323783823303533017413935458,
    9.860761315262647567646607066034827870915, 1.972152263052529513529321413206965574183, 3.944304526105059027058642826413931148366, 7.888609052210118054117285652827862296732,
    1.577721810442023610823457130565572459346, 3.155443620884047221646914261131144918693, 6.310887241768094443293828522262289837386, 1.262177448353618888658765704452457967477,
    2.524354896707237777317531408904915934954, 5.048709793414475554635062817809831869909, 1.009741958682895110927012563561966373982, 2.019483917365790221854025127123932747963,
    4.038967834731580443708050254247865495927, 8.077935669463160887416100508495730991854, 1.615587133892632177483220101699146198371, 3.231174267785264354966440203398292396741,
    6.462348535570528709932880406796584793483, 1.292469707114105741986576081359316958697, 2.584939414228211483973152162718633917393, 5.169878828456422967946304325437267834786,
    1.033975765691284593589260865087453566957, 2.067951531382569187178521730174907133915, 4.135903062765138374357043460349814267829, 8.271806125530276748714086920699628535658,
    1.654361225106055349742817384139925707132, 3.308722450212110699485634768279851414263, 6.617444900424221398971269536559702828526, 1.323488980084844279794253907311940565705,
    2.646977960169688559588507814623881131411, 5.293955920339377119177015629247762262821, 1.058791184067875423835403125849552452564, 2.117582368135750847670806251699104905128,
    4.235164736271501695341612503398209810257, 8.470329472543003390683225006796419620514, 1.694065894508600678136645001359283924103, 3.388131789017201356273290002718567848206,
    6.776263578034402712546580005437135696411, 1.355252715606880542509316001087427139282, 2.710505431213761085018632002174854278564, 5.421010862427522170037264004349708557129,
    1.084202172485504434007452800869941711426, 2.168404344971008868014905601739883422852, 4.336808689942017736029811203479766845703, 8.673617379884035472059622406959533691406,
    1.734723475976807094411924481391906738281, 3.469446951953614188823848962783813476563, 6.938893903907228377647697925567626953125, 1.387778780781445675529539585113525390625,
    2.77555756156289135105907917022705078125, 5.5511151231257827021181583404541015625, 1.1102230246251565404236316680908203125, 2.220446049250313080847263336181640625,
    4.44089209850062616169452667236328125, 8.8817841970012523233890533447265625, 1.7763568394002504646778106689453125, 3.552713678800500929355621337890625,
    7.10542735760100185871124267578125, 1.42108547152020037174224853515625, 2.8421709430404007434844970703125, 5.684341886080801486968994140625,
    1.136868377216160297393798828125, 2.27373675443232059478759765625, 4.5474735088646411895751953125, 9.094947017729282379150390625,
    1.818989403545856475830078125, 3.63797880709171295166015625, 7.2759576141834259033203125, 1.4551915228366851806640625,
    2.910383045673370361328125, 5.82076609134674072265625, 1.16415321826934814453125, 2.3283064365386962890625,
    4.656612873077392578125, 9.31322574615478515625, 1.86264514923095703125, 3.7252902984619140625,
    7.450580596923828125, 1.490116119384765625, 2.98023223876953125, 5.9604644775390625,
    1.1920928955078125, 2.384185791015625, 4.76837158203125, 9.5367431640625,
    1.9073486328125, 3.814697265625, 7.62939453125, 1.52587890625,
    3.0517578125, 6.103515625, 1.220703125, 2.44140625,
    4.8828125, 9.765625, 1.953125, 3.90625,
    7.8125, 1.5625, 3.125, 6.25,
    1.25, 2.5, 5.0, 1.0,
    2.0, 4.0, 8.0, 1.6,
    3.2, 6.4, 1.28, 2.56,
    5.12, 1.024, 2.048, 4.096,
    8.192, 1.6384, 3.2768, 6.5536,
    1.31072, 2.62144, 5.24288, 1.048576,
    2.097152, 4.194304, 8.388608, 1.6777216,
    3.3554432, 6.7108864, 1.34217728, 2.68435456,
    5.36870912, 1.073741824, 2.147483648, 4.294967296,
    8.589934592, 1.7179869184, 3.4359738368, 6.8719476736,
    1.37438953472, 2.74877906944, 5.49755813888, 1.099511627776,
    2.199023255552, 4.398046511104, 8.796093022208, 1.7592186044416,
    3.5184372088832, 7.0368744177664, 1.40737488355328, 2.81474976710656,
    5.62949953421312, 1.125899906842624, 2.251799813685248, 4.503599627370496,
    9.007199254740992, 1.8014398509481984, 3.6028797018963968, 7.2057594037927936,
    1.44115188075855872, 2.88230376151711744, 5.76460752303423488, 1.152921504606846976,
    2.305843009213693952, 4.611686018427387904, 9.223372036854775808, 1.8446744073709551616,
    3.6893488147419103232, 7.3786976294838206464, 1.47573952589676412928, 2.95147905179352825856,
    5.90295810358705651712, 1.180591620717411303424, 2.361183241434822606848, 4.722366482869645213696,
    9.444732965739290427392, 1.8889465931478580854784, 3.7778931862957161709568, 7.5557863725914323419136,
    1.51115727451828646838272, 3.02231454903657293676544, 6.04462909807314587353088, 1.208925819614629174706176,
    2.417851639229258349412352, 4.835703278458516698824704, 9.671406556917033397649408, 1.9342813113834066795298816,
    3.8685626227668133590597632, 7.7371252455336267181195264, 1.54742504910672534362390528, 3.09485009821345068724781056,
    6.18970019642690137449562112, 1.237940039285380274899124224, 2.475880078570760549798248448, 4.951760157141521099596496896,
    9.903520314283042199192993792, 1.9807040628566084398385987584, 3.9614081257132168796771975168, 7.9228162514264337593543950336,
    1.58456325028528675187087900672, 3.16912650057057350374175801344, 6.33825300114114700748351602688, 1.267650600228229401496703205376,
    2.535301200456458802993406410752, 5.070602400912917605986812821504, 1.0141204801825835211973625643008, 2.0282409603651670423947251286016,
    4.0564819207303340847894502572032, 8.1129638414606681695789005144064, 1.62259276829213363391578010288128, 3.24518553658426726783156020576256,
    6.49037107316853453566312041152512, 1.298074214633706907132624082305024, 2.596148429267413814265248164610048, 5.192296858534827628530496329220096,
    1.0384593717069655257060992658440192, 2.0769187434139310514121985316880384, 4.1538374868278621028243970633760768, 8.3076749736557242056487941267521536,
    1.66153499473114484112975882535043072, 3.32306998946228968225951765070086144, 6.64613997892457936451903530140172288, 1.329227995784915872903807060280344576,
    2.658455991569831745807614120560689152, 5.316911983139663491615228241121378304, 1.0633823966279326983230456482242756608, 2.1267647932558653966460912964485513216,
    4.2535295865117307932921825928971026432, 8.5070591730234615865843651857942052864, 1.70141183460469231731687303715884105728, 3.40282366920938463463374607431768211456,
    6.80564733841876926926749214863536422912, 1.361129467683753853853498429727072845824, 2.722258935367507707706996859454145691648, 5.444517870735015415413993718908291383296,
    1.088903574147003083082798743781658276659, 2.177807148294006166165597487563316553318, 4.355614296588012332331194975126633106637, 8.711228593176024664662389950253266213274,
    1.742245718635204932932477990050653242655, 3.484491437270409865864955980101306485309, 6.968982874540819731729911960202612970619, 1.393796574908163946345982392040522594124,
    2.787593149816327892691964784081045188248, 5.575186299632655785383929568162090376495, 1.115037259926531157076785913632418075299, 2.230074519853062314153571827264836150598,
    4.460149039706124628307143654529672301196, 8.920298079412249256614287309059344602392, 1.784059615882449851322857461811868920478, 3.568119231764899702645714923623737840957,
    7.136238463529799405291429847247475681914, 1.427247692705959881058285969449495136383, 2.854495385411919762116571938898990272765, 5.708990770823839524233143877797980545531,
    1.141798154164767904846628775559596109106, 2.283596308329535809693257551119192218212, 4.567192616659071619386515102238384436425, 9.134385233318143238773030204476768872850,
    1.826877046663628647754606040895353774570, 3.653754093327257295509212081790707549140, 7.307508186654514591018424163581415098280, 1.461501637330902918203684832716283019656,
    2.923003274661805836407369665432566039312, 5.846006549323611672814739330865132078624, 1.169201309864722334562947866173026415725, 2.338402619729444669125895732346052831449,
    4.676805239458889338251791464692105662899, 9.353610478917778676503582929384211325798, 1.870722095783555735300716585876842265160, 3.741444191567111470601433171753684530319,
    7.482888383134222941202866343507369060638, 1.496577676626844588240573268701473812128, 2.993155353253689176481146537402947624255, 5.986310706507378352962293074805895248511,
    1.197262141301475670592458614961179049702, 2.394524282602951341184917229922358099404, 4.789048565205902682369834459844716198809, 9.578097130411805364739668919689432397617,
    1.915619426082361072947933783937886479523, 3.831238852164722145895867567875772959047, 7.662477704329444291791735135751545918094, 1.532495540865888858358347027150309183619,
    3.064991081731777716716694054300618367237, 6.129982163463555433433388108601236734475, 1.225996432692711086686677621720247346895, 2.451992865385422173373355243440494693790,
    4.903985730770844346746710486880989387580, 9.807971461541688693493420973761978775160, 1.961594292308337738698684194752395755032, 3.923188584616675477397368389504791510064,
    7.846377169233350954794736779009583020128, 1.569275433846670190958947355801916604026, 3.138550867693340381917894711603833208051, 6.277101735386680763835789423207666416102,
    1.255420347077336152767157884641533283220, 2.510840694154672305534315769283066566441, 5.021681388309344611068631538566133132882, 1.004336277661868922213726307713226626576,
    2.008672555323737844427452615426453253153, 4.017345110647475688854905230852906506306, 8.034690221294951377709810461705813012611, 1.606938044258990275541962092341162602522,
    3.213876088517980551083924184682325205044, 6.427752177035961102167848369364650410089, 1.285550435407192220433569673872930082018, 2.571100870814384440867139347745860164036,
    5.142201741628768881734278695491720328071, 1.028440348325753776346855739098344065614, 2.056880696651507552693711478196688131228, 4.113761393303015105387422956393376262457,
    8.227522786606030210774845912786752524914, 1.645504557321206042154969182557350504983, 3.291009114642412084309938365114701009965, 6.582018229284824168619876730229402019931,
    1.316403645856964833723975346045880403986, 2.632807291713929667447950692091760807972, 5.265614583427859334895901384183521615945, 1.053122916685571866979180276836704323189,
    2.106245833371143733958360553673408646378, 4.212491666742287467916721107346817292756, 8.424983333484574935833442214693634585512, 1.684996666696914987166688442938726917102,
    3.369993333393829974333376885877453834205, 6.739986666787659948666753771754907668409, 1.347997333357531989733350754350981533682, 2.695994666715063979466701508701963067364,
    5.391989333430127958933403017403926134727, 1.078397866686025591786680603480785226945, 2.156795733372051183573361206961570453891, 4.313591466744102367146722413923140907782,
    8.627182933488204734293444827846281815564, 1.725436586697640946858688965569256363113, 3.450873173395281893717377931138512726226, 6.901746346790563787434755862277025452451,
    1.380349269358112757486951172455405090490, 2.760698538716225514973902344910810180980, 5.521397077432451029947804689821620361961, 1.104279415486490205989560937964324072392,
    2.208558830972980411979121875928648144784, 4.417117661945960823958243751857296289569, 8.834235323891921647916487503714592579137, 1.766847064778384329583297500742918515827,
    3.533694129556768659166595001485837031655, 7.067388259113537318333190002971674063310, 1.413477651822707463666638000594334812662, 2.826955303645414927333276001188669625324,
    5.653910607290829854666552002377339250648, 1.130782121458165970933310400475467850130, 2.261564242916331941866620800950935700259, 4.523128485832663883733241601901871400518,
    9.046256971665327767466483203803742801037, 1.809251394333065553493296640760748560207, 3.618502788666131106986593281521497120415, 7.237005577332262213973186563042994240829,
    1.447401115466452442794637312608598848166, 2.894802230932904885589274625217197696332, 5.789604461865809771178549250434395392663, 1.157920892373161954235709850086879078533,
    2.315841784746323908471419700173758157065, 4.631683569492647816942839400347516314131, 9.263367138985295633885678800695032628262, 1.852673427797059126777135760139006525652,
    3.705346855594118253554271520278013051305, 7.410693711188236507108543040556026102609, 1.482138742237647301421708608111205220522, 2.964277484475294602843417216222410441044,
    5.928554968950589205686834432444820882087, 1.185710993790117841137366886488964176417, 2.371421987580235682274733772977928352835, 4.742843975160471364549467545955856705670,
    9.485687950320942729098935091911713411340, 1.897137590064188545819787018382342682268, 3.794275180128377091639574036764685364536, 7.588550360256754183279148073529370729072,
    1.517710072051350836655829614705874145814, 3.035420144102701673311659229411748291629, 6.070840288205403346623318458823496583258, 1.214168057641080669324663691764699316652,
    2.428336115282161338649327383529398633303, 4.856672230564322677298654767058797266606, 9.713344461128645354597309534117594533212, 1.942668892225729070919461906823518906642,
    3.885337784451458141838923813647037813285, 7.770675568902916283677847627294075626570, 1.554135113780583256735569525458815125314, 3.108270227561166513471139050917630250628,
    6.216540455122333026942278101835260501256, 1.243308091024466605388455620367052100251, 2.486616182048933210776911240734104200502, 4.973232364097866421553822481468208401005,
    9.946464728195732843107644962936416802009, 1.989292945639146568621528992587283360402, 3.978585891278293137243057985174566720804, 7.957171782556586274486115970349133441607,
    1.591434356511317254897223194069826688321, 3.182868713022634509794446388139653376643, 6.365737426045269019588892776279306753286, 1.273147485209053803917778555255861350657,
    2.546294970418107607835557110511722701314, 5.092589940836215215671114221023445402629, 1.018517988167243043134222844204689080526, 2.037035976334486086268445688409378161051,
    4.074071952668972172536891376818756322103, 8.148143905337944345073782753637512644206, 1.629628781067588869014756550727502528841, 3.259257562135177738029513101455005057682,
    6.518515124270355476059026202910010115365, 1.303703024854071095211805240582002023073, 2.607406049708142190423610481164004046146, 5.214812099416284380847220962328008092292,
    1.042962419883256876169444192465601618458, 2.085924839766513752338888384931203236917, 4.171849679533027504677776769862406473833, 8.343699359066055009355553539724812947667,
    1.668739871813211001871110707944962589533, 3.337479743626422003742221415889925179067, 6.674959487252844007484442831779850358133, 1.334991897450568801496888566355970071627,
    2.669983794901137602993777132711940143253, 5.339967589802275205987554265423880286507, 1.067993517960455041197510853084776057301, 2.135987035920910082395021706169552114603,
    4.271974071841820164790043412339104229205, 8.543948143683640329580086824678208458411, 1.708789628736728065916017364935641691682, 3.417579257473456131832034729871283383364,
    6.835158514946912263664069459742566766729, 1.367031702989382452732813891948513353346, 2.734063405978764905465627783897026706691, 5.468126811957529810931255567794053413383,
    1.093625362391505962186251113558810682677, 2.187250724783011924372502227117621365353, 4.374501449566023848745004454235242730706, 8.749002899132047697490008908470485461413,
    1.749800579826409539498001781694097092283, 3.499601159652819078996003563388194184565, 6.999202319305638157992007126776388369130, 1.399840463861127631598401425355277673826,
    2.799680927722255263196802850710555347652, 5.599361855444510526393605701421110695304, 1.119872371088902105278721140284222139061, 2.239744742177804210557442280568444278122,
    4.479489484355608421114884561136888556243, 8.958978968711216842229769122273777112487, 1.791795793742243368445953824454755422497, 3.583591587484486736891907648909510844995,
    7.167183174968973473783815297819021689989, 1.433436634993794694756763059563804337998, 2.866873269987589389513526119127608675996, 5.733746539975178779027052238255217351991,
    1.146749307995035755805410447651043470398, 2.293498615990071511610820895302086940797, 4.586997231980143023221641790604173881593, 9.173994463960286046443283581208347763186,
    1.834798892792057209288656716241669552637, 3.669597785584114418577313432483339105275, 7.339195571168228837154626864966678210549, 1.467839114233645767430925372993335642110,
    2.935678228467291534861850745986671284220, 5.871356456934583069723701491973342568439, 1.174271291386916613944740298394668513688, 2.348542582773833227889480596789337027376,
    4.697085165547666455778961193578674054751, 9.394170331095332911557922387157348109503, 1.878834066219066582311584477431469621901, 3.757668132438133164623168954862939243801,
    7.515336264876266329246337909725878487602, 1.503067252975253265849267581945175697520, 3.006134505950506531698535163890351395041, 6.012269011901013063397070327780702790082,
    1.202453802380202612679414065556140558016, 2.404907604760405225358828131112281116033, 4.809815209520810450717656262224562232065, 9.619630419041620901435312524449124464131,
    1.923926083808324180287062504889824892826, 3.847852167616648360574125009779649785652, 7.695704335233296721148250019559299571305, 1.539140867046659344229650003911859914261,
    3.078281734093318688459300007823719828522, 6.156563468186637376918600015647439657044, 1.231312693637327475383720003129487931409, 2.462625387274654950767440006258975862817,
    4.925250774549309901534880012517951725635, 9.850501549098619803069760025035903451270, 1.970100309819723960613952005007180690254, 3.940200619639447921227904010014361380508,
    7.880401239278895842455808020028722761016, 1.576080247855779168491161604005744552203, 3.152160495711558336982323208011489104406, 6.304320991423116673964646416022978208813,
    1.260864198284623334792929283204595641763, 2.521728396569246669585858566409191283525, 5.043456793138493339171717132818382567050, 1.008691358627698667834343426563676513410,
    2.017382717255397335668686853127353026820, 4.034765434510794671337373706254706053640, 8.069530869021589342674747412509412107280, 1.613906173804317868534949482501882421456,
    3.227812347608635737069898965003764842912, 6.455624695217271474139797930007529685824, 1.291124939043454294827959586001505937165, 2.582249878086908589655919172003011874330,
    5.164499756173817179311838344006023748659, 1.032899951234763435862367668801204749732, 2.065799902469526871724735337602409499464, 4.131599804939053743449470675204818998928,
    8.263199609878107486898941350409637997855, 1.652639921975621497379788270081927599571, 3.305279843951242994759576540163855199142, 6.610559687902485989519153080327710398284,
    1.322111937580497197903830616065542079657, 2.644223875160994395807661232131084159314, 5.288447750321988791615322464262168318627, 1.057689550064397758323064492852433663725,
    2.115379100128795516646128985704867327451, 4.230758200257591033292257971409734654902, 8.461516400515182066584515942819469309804, 1.692303280103036413316903188563893861961,
    3.384606560206072826633806377127787723921, 6.769213120412145653267612754255575447843, 1.353842624082429130653522550851115089569, 2.707685248164858261307045101702230179137,
    5.415370496329716522614090203404460358274, 1.083074099265943304522818040680892071655, 2.166148198531886609045636081361784143310, 4.332296397063773218091272162723568286619,
    8.664592794127546436182544325447136573239, 1.732918558825509287236508865089427314648, 3.465837117651018574473017730178854629296, 6.931674235302037148946035460357709258591,
    1.386334847060407429789207092071541851718, 2.772669694120814859578414184143083703436, 5.545339388241629719156828368286167406873, 1.109067877648325943831365673657233481375,
    2.218135755296651887662731347314466962749, 4.436271510593303775325462694628933925498, 8.872543021186607550650925389257867850997, 1.774508604237321510130185077851573570199,
    3.549017208474643020260370155703147140399, 7.098034416949286040520740311406294280797, 1.419606883389857208104148062281258856159, 2.839213766779714416208296124562517712319,
    5.678427533559428832416592249125035424638, 1.135685506711885766483318449825007084928, 2.271371013423771532966636899650014169855, 4.542742026847543065933273799300028339710,
    9.085484053695086131866547598600056679421, 1.817096810739017226373309519720011335884, 3.634193621478034452746619039440022671768, 7.268387242956068905493238078880045343536,
    1.453677448591213781098647615776009068707, 2.907354897182427562197295231552018137415, 5.814709794364855124394590463104036274829, 1.162941958872971024878918092620807254966,
    2.325883917745942049757836185241614509932, 4.651767835491884099515672370483229019863, 9.303535670983768199031344740966458039727, 1.860707134196753639806268948193291607945,
    3.721414268393507279612537896386583215891, 7.442828536787014559225075792773166431781, 1.488565707357402911845015158554633286356, 2.977131414714805823690030317109266572713,
    5.954262829429611647380060634218533145425, 1.190852565885922329476012126843706629085, 2.381705131771844658952024253687413258170, 4.763410263543689317904048507374826516340,
    9.526820527087378635808097014749653032680, 1.905364105417475727161619402949930606536, 3.810728210834951454323238805899861213072, 7.621456421669902908646477611799722426144,
    1.524291284333980581729295522359944485229, 3.048582568667961163458591044719888970458, 6.097165137335922326917182089439777940915, 1.219433027467184465383436417887955588183,
    2.438866054934368930766872835775911176366, 4.877732109868737861533745671551822352732, 9.755464219737475723067491343103644705464, 1.951092843947495144613498268620728941093,
    3.902185687894990289226996537241457882186, 7.804371375789980578453993074482915764371, 1.560874275157996115690798614896583152874, 3.121748550315992231381597229793166305749,
    6.243497100631984462763194459586332611497, 1.248699420126396892552638891917266522299, 2.497398840252793785105277783834533044599, 4.994797680505587570210555567669066089198,
    9.989595361011175140421111135338132178396, 1.997919072202235028084222227067626435679, 3.995838144404470056168444454135252871358, 7.991676288808940112336888908270505742716,
    1.598335257761788022467377781654101148543, 3.196670515523576044934755563308202297087, 6.393341031047152089869511126616404594173, 1.278668206209430417973902225323280918835,
    2.557336412418860835947804450646561837669, 5.114672824837721671895608901293123675339, 1.022934564967544334379121780258624735068, 2.045869129935088668758243560517249470135,
    4.091738259870177337516487121034498940271, 8.183476519740354675032974242068997880542, 1.636695303948070935006594848413799576108, 3.273390607896141870013189696827599152217,
    6.546781215792283740026379393655198304433, 1.309356243158456748005275878731039660887, 2.618712486316913496010551757462079321773, 5.237424972633826992021103514924158643547,
    1.047484994526765398404220702984831728709, 2.094969989053530796808441405969663457419, 4.189939978107061593616882811939326914837, 8.379879956214123187233765623878653829675,
    1.675975991242824637446753124775730765935, 3.351951982485649274893506249551461531870, 6.703903964971298549787012499102923063740, 1.340780792994259709957402499820584612748,
    2.681561585988519419914804999641169225496, 5.363123171977038839829609999282338450992, 1.072624634395407767965921999856467690198, 2.145249268790815535931843999712935380397,
    4.290498537581631071863687999425870760793, 8.580997075163262143727375998851741521587, 1.716199415032652428745475199770348304317, 3.432398830065304857490950399540696608635,
    6.864797660130609714981900799081393217269, 1.372959532026121942996380159816278643454, 2.745919064052243885992760319632557286908, 5.491838128104487771985520639265114573816,
    1.098367625620897554397104127853022914763, 2.196735251241795108794208255706045829526, 4.393470502483590217588416511412091659052, 8.786941004967180435176833022824183318105,
    1.757388200993436087035366604564836663621, 3.514776401986872174070733209129673327242, 7.029552803973744348141466418259346654484, 1.405910560794748869628293283651869330897,
    2.811821121589497739256586567303738661794, 5.623642243178995478513173134607477323587, 1.124728448635799095702634626921495464717, 2.249456897271598191405269253842990929435,
    4.498913794543196382810538507685981858870, 8.997827589086392765621077015371963717739, 1.799565517817278553124215403074392743548, 3.599131035634557106248430806148785487096,
    7.198262071269114212496861612297570974192, 1.439652414253822842499372322459514194838, 2.879304828507645684998744644919028389677, 5.758609657015291369997489289838056779353,
    1.151721931403058273999497857967611355871, 2.303443862806116547998995715935222711741, 4.606887725612233095997991431870445423483, 9.213775451224466191995982863740890846965,
    1.842755090244893238399196572748178169393, 3.685510180489786476798393145496356338786, 7.371020360979572953596786290992712677572, 1.474204072195914590719357258198542535514,
    2.948408144391829181438714516397085071029, 5.896816288783658362877429032794170142058, 1.179363257756731672575485806558834028412, 2.358726515513463345150971613117668056823,
    4.717453031026926690301943226235336113646, 9.434906062053853380603886452470672227292, 1.886981212410770676120777290494134445458, 3.773962424821541352241554580988268890917,
    7.547924849643082704483109161976537781834, 1.509584969928616540896621832395307556367, 3.019169939857233081793243664790615112734, 6.038339879714466163586487329581230225467,
    1.207667975942893232717297465916246045093, 2.415335951885786465434594931832492090187, 4.830671903771572930869189863664984180374, 9.661343807543145861738379727329968360747,
    1.932268761508629172347675945465993672149, 3.864537523017258344695351890931987344299, 7.729075046034516689390703781863974688598, 1.545815009206903337878140756372794937720,
    3.091630018413806675756281512745589875439, 6.183260036827613351512563025491179750878, 1.236652007365522670302512605098235950176, 2.473304014731045340605025210196471900351,
    4.946608029462090681210050420392943800703, 9.893216058924181362420100840785887601405, 1.978643211784836272484020168157177520281, 3.957286423569672544968040336314355040562,
    7.914572847139345089936080672628710081124, 1.582914569427869017987216134525742016225, 3.165829138855738035974432269051484032450, 6.331658277711476071948864538102968064899,
    1.266331655542295214389772907620593612980, 2.532663311084590428779545815241187225960, 5.065326622169180857559091630482374451919, 1.013065324433836171511818326096474890384,
    2.026130648867672343023636652192949780768, 4.052261297735344686047273304385899561536, 8.104522595470689372094546608771799123071, 1.620904519094137874418909321754359824614,
    3.241809038188275748837818643508719649228, 6.483618076376551497675637287017439298457, 1.296723615275310299535127457403487859691, 2.593447230550620599070254914806975719383,
    5.186894461101241198140509829613951438766, 1.037378892220248239628101965922790287753, 2.074757784440496479256203931845580575506, 4.149515568880992958512407863691161151012,
    8.299031137761985917024815727382322302025, 1.659806227552397183404963145476464460405, 3.319612455104794366809926290952928920810, 6.639224910209588733619852581905857841620,
    1.327844982041917746723970516381171568324, 2.655689964083835493447941032762343136648, 5.311379928167670986895882065524686273296, 1.062275985633534197379176413104937254659,
    2.124551971267068394758352826209874509318, 4.249103942534136789516705652419749018637, 8.498207885068273579033411304839498037273, 1.699641577013654715806682260967899607455,
    3.399283154027309431613364521935799214909, 6.798566308054618863226729043871598429819, 1.359713261610923772645345808774319685964, 2.719426523221847545290691617548639371928,
    5.438853046443695090581383235097278743855, 1.087770609288739018116276647019455748771, 2.175541218577478036232553294038911497542, 4.351082437154956072465106588077822995084,
    8.702164874309912144930213176155645990168, 1.740432974861982428986042635231129198034, 3.480865949723964857972085270462258396067, 6.961731899447929715944170540924516792134,
    1.392346379889585943188834108184903358427, 2.784692759779171886377668216369806716854, 5.569385519558343772755336432739613433708, 1.113877103911668754551067286547922686742,
    2.227754207823337509102134573095845373483, 4.455508415646675018204269146191690746966, 8.911016831293350036408538292383381493932, 1.782203366258670007281707658476676298786,
    3.564406732517340014563415316953352597573, 7.128813465034680029126830633906705195146, 1.425762693006936005825366126781341039029, 2.851525386013872011650732253562682078058,
    5.703050772027744023301464507125364156117, 1.140610154405548804660292901425072831223, 2.281220308811097609320585802850145662447, 4.562440617622195218641171605700291324893,
    9.124881235244390437282343211400582649786, 1.824976247048878087456468642280116529957, 3.649952494097756174912937284560233059915, 7.299904988195512349825874569120466119829,
    1.459980997639102469965174913824093223966, 2.919961995278204939930349827648186447932, 5.839923990556409879860699655296372895863, 1.167984798111281975972139931059274579173,
    2.335969596222563951944279862118549158345, 4.671939192445127903888559724237098316691, 9.343878384890255807777119448474196633381, 1.868775676978051161555423889694839326676,
    3.737551353956102323110847779389678653353, 7.475102707912204646221695558779357306705, 1.495020541582440929244339111755871461341, 2.990041083164881858488678223511742922682,
    5.980082166329763716977356447023485845364, 1.196016433265952743395471289404697169073, 2.392032866531905486790942578809394338146, 4.784065733063810973581885157618788676291,
    9.568131466127621947163770315237577352582, 1.913626293225524389432754063047515470516, 3.827252586451048778865508126095030941033, 7.654505172902097557731016252190061882066,
    1.530901034580419511546203250438012376413, 3.061802069160839023092406500876024752826, 6.123604138321678046184813001752049505653, 1.224720827664335609236962600350409901131,
    2.449441655328671218473925200700819802261, 4.898883310657342436947850401401639604522, 9.797766621314684873895700802803279209044, 1.959553324262936974779140160560655841809,
    3.919106648525873949558280321121311683618, 7.838213297051747899116560642242623367236, 1.567642659410349579823312128448524673447, 3.135285318820699159646624256897049346894,
    6.270570637641398319293248513794098693788, 1.254114127528279663858649702758819738758, 2.508228255056559327717299405517639477515, 5.016456510113118655434598811035278955031,
    1.003291302022623731086919762207055791006, 2.006582604045247462173839524414111582012, 4.013165208090494924347679048828223164025, 8.026330416180989848695358097656446328049,
    1.605266083236197969739071619531289265610, 3.210532166472395939478143239062578531220, 6.421064332944791878956286478125157062439, 1.284212866588958375791257295625031412488,
    2.568425733177916751582514591250062824976, 5.136851466355833503165029182500125649952, 1.027370293271166700633005836500025129990, 2.054740586542333401266011673000050259981,
    4.109481173084666802532023346000100519961, 8.218962346169333605064046692000201039922, 1.643792469233866721012809338400040207984, 3.287584938467733442025618676800080415969,
    6.575169876935466884051237353600160831938, 1.315033975387093376810247470720032166388, 2.630067950774186753620494941440064332775, 5.260135901548373507240989882880128665550,
    1.052027180309674701448197976576025733110, 2.104054360619349402896395953152051466220, 4.208108721238698805792791906304102932440, 8.416217442477397611585583812608205864881,
    1.683243488495479522317116762521641172976, 3.366486976990959044634233525043282345952, 6.732973953981918089268467050086564691904, 1.346594790796383617853693410017312938381,
    2.693189581592767235707386820034625876762, 5.386379163185534471414773640069251753524, 1.077275832637106894282954728013850350705, 2.154551665274213788565909456027700701409,
    4.309103330548427577131818912055401402819, 8.618206661096855154263637824110802805638, 1.723641332219371030852727564822160561128, 3.447282664438742061705455129644321122255,
    6.894565328877484123410910259288642244510, 1.378913065775496824682182051857728448902, 2.757826131550993649364364103715456897804, 5.515652263101987298728728207430913795608,
    1.103130452620397459745745641486182759122, 2.206260905240794919491491282972365518243, 4.412521810481589838982982565944731036486, 8.825043620963179677965965131889462072973,
    1.765008724192635935593193026377892414595, 3.530017448385271871186386052755784829189, 7.060034896770543742372772105511569658378, 1.412006979354108748474554421102313931676,
    2.824013958708217496949108842204627863351, 5.648027917416434993898217684409255726703, 1.129605583483286998779643536881851145341, 2.259211166966573997559287073763702290681,
    4.518422333933147995118574147527404581362, 9.036844667866295990237148295054809162724, 1.807368933573259198047429659010961832545, 3.614737867146518396094859318021923665090,
    7.229475734293036792189718636043847330179, 1.445895146858607358437943727208769466036, 2.891790293717214716875887454417538932072, 5.783580587434429433751774908835077864144,
    1.156716117486885886750354981767015572829, 2.313432234973771773500709963534031145657, 4.626864469947543547001419927068062291315, 9.253728939895087094002839854136124582630,
    1.850745787979017418800567970827224916526, 3.701491575958034837601135941654449833052, 7.402983151916069675202271883308899666104, 1.480596630383213935040454376661779933221,
    2.961193260766427870080908753323559866442, 5.922386521532855740161817506647119732883, 1.184477304306571148032363501329423946577, 2.368954608613142296064727002658847893153,
    4.737909217226284592129454005317695786306, 9.475818434452569184258908010635391572613, 1.895163686890513836851781602127078314523, 3.790327373781027673703563204254156629045,
    7.580654747562055347407126408508313258090, 1.516130949512411069481425281701662651618, 3.032261899024822138962850563403325303236, 6.064523798049644277925701126806650606472,
    1.212904759609928855585140225361330121294, 2.425809519219857711170280450722660242589, 4.851619038439715422340560901445320485178, 9.703238076879430844681121802890640970356,
    1.940647615375886168936224360578128194071, 3.881295230751772337872448721156256388142, 7.762590461503544675744897442312512776284, 1.552518092300708935148979488462502555257,
    3.105036184601417870297958976925005110514, 6.210072369202835740595917953850010221028, 1.242014473840567148119183590770002044206, 2.484028947681134296238367181540004088411,
    4.968057895362268592476734363080008176822, 9.936115790724537184953468726160016353644, 1.987223158144907436990693745232003270729, 3.974446316289814873981387490464006541458,
    7.948892632579629747962774980928013082915, 1.589778526515925949592554996185602616583, 3.179557053031851899185109992371205233166, 6.359114106063703798370219984742410466332,
    1.271822821212740759674043996948482093266, 2.543645642425481519348087993896964186533, 5.087291284850963038696175987793928373066, 1.017458256970192607739235197558785674613,
    2.034916513940385215478470395117571349226, 4.069833027880770430956940790235142698453, 8.139666055761540861913881580470285396905, 1.627933211152308172382776316094057079381,
    3.255866422304616344765552632188114158762, 6.511732844609232689531105264376228317524, 1.302346568921846537906221052875245663505, 2.604693137843693075812442105750491327010,
    5.209386275687386151624884211500982654019, 1.041877255137477230324976842300196530804, 2.083754510274954460649953684600393061608, 4.167509020549908921299907369200786123215,
    8.335018041099817842599814738401572246431, 1.667003608219963568519962947680314449286, 3.334007216439927137039925895360628898572, 6.668014432879854274079851790721257797145,
    1.333602886575970854815970358144251559429, 2.667205773151941709631940716288503118858, 5.334411546303883419263881432577006237716, 1.066882309260776683852776286515401247543,
    2.133764618521553367705552573030802495086, 4.267529237043106735411105146061604990173, 8.535058474086213470822210292123209980345, 1.707011694817242694164442058424641996069,
    3.414023389634485388328884116849283992138, 6.828046779268970776657768233698567984276, 1.365609355853794155331553646739713596855, 2.731218711707588310663107293479427193710,
    5.462437423415176621326214586958854387421, 1.092487484683035324265242917391770877484, 2.184974969366070648530485834783541754968, 4.369949938732141297060971669567083509937,
    8.739899877464282594121943339134167019874, 1.747979975492856518824388667826833403975, 3.495959950985713037648777335653666807949, 6.991919901971426075297554671307333615899,
    1.398383980394285215059510934261466723180, 2.796767960788570430119021868522933446360, 5.593535921577140860238043737045866892719, 1.118707184315428172047608747409173378544,
    2.237414368630856344095217494818346757088, 4.474828737261712688190434989636693514175, 8.949657474523425376380869979273387028351, 1.789931494904685075276173995854677405670,
    3.579862989809370150552347991709354811340, 7.159725979618740301104695983418709622680, 1.431945195923748060220939196683741924536, 2.863890391847496120441878393367483849072,
    5.727780783694992240883756786734967698144, 1.145556156738998448176751357346993539629, 2.291112313477996896353502714693987079258, 4.582224626955993792707005429387974158515,
    9.164449253911987585414010858775948317031, 1.832889850782397517082802171755189663406, 3.665779701564795034165604343510379326812, 7.331559403129590068331208687020758653625,
    1.466311880625918013666241737404151730725, 2.932623761251836027332483474808303461450, 5.865247522503672054664966949616606922900, 1.173049504500734410932993389923321384580,
    2.346099009001468821865986779846642769160, 4.692198018002937643731973559693285538320, 9.384396036005875287463947119386571076640, 1.876879207201175057492789423877314215328,
    3.753758414402350114985578847754628430656, 7.507516828804700229971157695509256861312, 1.501503365760940045994231539101851372262, 3.003006731521880091988463078203702744525,
    6.006013463043760183976926156407405489049, 1.201202692608752036795385231281481097810, 2.402405385217504073590770462562962195620, 4.804810770435008147181540925125924391240,
    9.609621540870016294363081850251848782479, 1.921924308174003258872616370050369756496, 3.843848616348006517745232740100739512992, 7.687697232696013035490465480201479025983,
    1.537539446539202607098093096040295805197, 3.075078893078405214196186192080591610393, 6.150157786156810428392372384161183220787, 1.230031557231362085678474476832236644157,
    2.460063114462724171356948953664473288315, 4.920126228925448342713897907328946576629, 9.840252457850896685427795814657893153259, 1.968050491570179337085559162931578630652,
    3.936100983140358674171118325863157261303, 7.872201966280717348342236651726314522607, 1.574440393256143469668447330345262904521, 3.148880786512286939336894660690525809043,
    6.297761573024573878673789321381051618085, 1.259552314604914775734757864276210323617, 2.519104629209829551469515728552420647234, 5.038209258419659102939031457104841294468,
    1.007641851683931820587806291420968258894, 2.015283703367863641175612582841936517787, 4.030567406735727282351225165683873035575, 8.061134813471454564702450331367746071149,
    1.612226962694290912940490066273549214230, 3.224453925388581825880980132547098428460, 6.448907850777163651761960265094196856920, 1.289781570155432730352392053018839371384,
    2.579563140310865460704784106037678742768, 5.159126280621730921409568212075357485536, 1.031825256124346184281913642415071497107, 2.063650512248692368563827284830142994214,
    4.127301024497384737127654569660285988428, 8.254602048994769474255309139320571976857, 1.650920409798953894851061827864114395371, 3.301840819597907789702123655728228790743,
    6.603681639195815579404247311456457581486, 1.320736327839163115880849462291291516297, 2.641472655678326231761698924582583032594, 5.282945311356652463523397849165166065188,
    1.056589062271330492704679569833033213038, 2.113178124542660985409359139666066426075, 4.226356249085321970818718279332132852151, 8.452712498170643941637436558664265704302,
    1.690542499634128788327487311732853140860, 3.381084999268257576654974623465706281721, 6.762169998536515153309949246931412563441, 1.352433999707303030661989849386282512688,
    2.704867999414606061323979698772565025376, 5.409735998829212122647959397545130050753, 1.081947199765842424529591879509026010151, 2.163894399531684849059183759018052020301,
    4.327788799063369698118367518036104040602, 8.655577598126739396236735036072208081205, 1.731115519625347879247347007214441616241, 3.462231039250695758494694014428883232482,
    6.924462078501391516989388028857766464964, 1.384892415700278303397877605771553292993, 2.769784831400556606795755211543106585986, 5.539569662801113213591510423086213171971,
    1.107913932560222642718302084617242634394, 2.215827865120445285436604169234485268788, 4.431655730240890570873208338468970537577, 8.863311460481781141746416676937941075154,
    1.772662292096356228349283335387588215031, 3.545324584192712456698566670775176430061, 7.090649168385424913397133341550352860123, 1.418129833677084982679426668310070572025,
    2.836259667354169965358853336620141144049, 5.672519334708339930717706673240282288098, 1.134503866941667986143541334648056457620, 2.269007733883335972287082669296112915239,
    4.538015467766671944574165338592225830479, 9.076030935533343889148330677184451660957, 1.815206187106668777829666135436890332191, 3.630412374213337555659332270873780664383,
    7.260824748426675111318664541747561328766, 1.452164949685335022263732908349512265753, 2.904329899370670044527465816699024531506, 5.808659798741340089054931633398049063013,
    1.161731959748268017810986326679609812603, 2.323463919496536035621972653359219625205, 4.646927838993072071243945306718439250410, 9.293855677986144142487890613436878500820,
    1.858771135597228828497578122687375700164, 3.717542271194457656995156245374751400328, 7.435084542388915313990312490749502800656, 1.487016908477783062798062498149900560131,
    2.974033816955566125596124996299801120263, 5.948067633911132251192249992599602240525, 1.189613526782226450238449998519920448105, 2.379227053564452900476899997039840896210,
    4.758454107128905800953799994079681792420, 9.516908214257811601907599988159363584840, 1.903381642851562320381519997631872716968, 3.806763285703124640763039995263745433936,
    7.613526571406249281526079990527490867872, 1.522705314281249856305215998105498173574, 3.045410628562499712610431996210996347149, 6.090821257124999425220863992421992694298,
    1.218164251424999885044172798484398538860, 2.436328502849999770088345596968797077719, 4.872657005699999540176691193937594155438, 9.745314011399999080353382387875188310876,
    1.949062802279999816070676477575037662175, 3.898125604559999632141352955150075324350, 7.796251209119999264282705910300150648701, 1.559250241823999852856541182060030129740,
    3.118500483647999705713082364120060259480, 6.237000967295999411426164728240120518961, 1.247400193459199882285232945648024103792, 2.494800386918399764570465891296048207584,
    4.989600773836799529140931782592096415169, 9.979201547673599058281863565184192830337, 1.995840309534719811656372713036838566067, 3.991680619069439623312745426073677132135,
    7.983361238138879246625490852147354264270, 1.596672247627775849325098170429470852854, 3.193344495255551698650196340858941705708, 6.386688990511103397300392681717883411416,
    1.277337798102220679460078536343576682283, 2.554675596204441358920157072687153364566, 5.109351192408882717840314145374306729133, 1.021870238481776543568062829074861345827,
    2.043740476963553087136125658149722691653, 4.087480953927106174272251316299445383306, 8.174961907854212348544502632598890766612, 1.634992381570842469708900526519778153322,
    3.269984763141684939417801053039556306645, 6.539969526283369878835602106079112613290, 1.307993905256673975767120421215822522658, 2.615987810513347951534240842431645045316,
    5.231975621026695903068481684863290090632, 1.046395124205339180613696336972658018126, 2.092790248410678361227392673945316036253, 4.185580496821356722454785347890632072505,
    8.371160993642713444909570695781264145011, 1.674232198728542688981914139156252829002, 3.348464397457085377963828278312505658004, 6.696928794914170755927656556625011316009,
    1.339385758982834151185531311325002263202, 2.678771517965668302371062622650004526404, 5.357543035931336604742125245300009052807, 1.071508607186267320948425049060001810561,
    2.143017214372534641896850098120003621123, 4.286034428745069283793700196240007242246, 8.572068857490138567587400392480014484491, 1.714413771498027713517480078496002896898,
    3.428827542996055427034960156992005793796, 6.857655085992110854069920313984011587593, 1.371531017198422170813984062796802317519, 2.743062034396844341627968125593604635037,
    5.486124068793688683255936251187209270074, 1.097224813758737736651187250237441854015, 2.194449627517475473302374500474883708030, 4.388899255034950946604749000949767416060,
    8.777798510069901893209498001899534832119, 1.755559702013980378641899600379906966424, 3.511119404027960757283799200759813932848, 7.022238808055921514567598401519627865695,
    1.404447761611184302913519680303925573139, 2.808895523222368605827039360607851146278, 5.617791046444737211654078721215702292556, 1.123558209288947442330815744243140458511,
    2.247116418577894884661631488486280917022, 4.494232837155789769323262976972561834045, 8.988465674311579538646525953945123668090, 1.797693134862315907729305190789024733618,
];

pub(crate) const EXPPOW: [i32; 2048] = [
    -308, -308, -308, -308, -307, -307, -307, -306, -306, -306,
    -305, -305, -305, -305, -304, -304, -304, -303, -303, -303,
    -302, -302, -302, -302, -301, -301, -301, -300, -300, -300,
    -299, -299, -299, -299, -298, -298, -298, -297, -297, -297,
    -296, -296, -296, -296, -295, -295, -295, -294, -294, -294,
    -293, -293, -293, -292, -292, -292, -292, -291, -291, -291,
    -290, -290, -290, -289, -289, -289, -289, -288, -288, -288,
    -287, -287, -287, -286, -286, -286, -286, -285, -285, -285,
    -284, -284, -284, -283, -283, -283, -283, -282, -282, -282,
    -281, -281, -281, -280, -280, -280, -280, -279, -279, -279,
    -278, -278, -278, -277, -277, -277, -277, -276, -276, -276,
    -275, -275, -275, -274, -274, -274, -274, -273, -273, -273,
    -272, -272, -272, -271, -271, -271, -271, -270, -270, -270,
    -269, -269, -269, -268, -268, -268, -268, -267, -267, -267,
    -266, -266, -266, -265, -265, -265, -265, -264, -264, -264,
    -263, -263, -263, -262, -262, -262, -261, -261, -261, -261,
    -260, -260, -260, -259, -259, -259, -258, -258, -258, -258,
    -257, -257, -257, -256, -256, -256, -255, -255, -255, -255,
    -254, -254, -254, -253, -253, -253, -252, -252, -252, -252,
    -251, -251, -251, -250, -250, -250, -249, -249, -249, -249,
    -248, -248, -248, -247, -247, -247, -246, -246, -246, -246,
    -245, -245, -245, -244, -244, -244, -243, -243, -243, -243,
    -242, -242, -242, -241, -241, -241, -240, -240, -240, -240,
    -239, -239, -239, -238, -238, -238, -237, -237, -237, -237,
    -236, -236, -236, -235, -235, -235, -234, -234, -234, -233,
    -233, -233, -233, -232, -232, -232, -231, -231, -231, -230,
    -230, -230, -230, -229, -229, -229, -228, -228, -228, -227,
    -227, -227, -227, -226, -226, -226, -225, -225, -225, -224,
    -224, -224, -224, -223, -223, -223, -222, -222, -222, -221,
    -221, -221, -221, -220, -220, -220, -219, -219, -219, -218,
    -218, -218, -218, -217, -217, -217, -216, -216, -216, -215,
    -215, -215, -215, -214, -214, -214, -213, -213, -213, -212,
    -212, -212, -212, -211, -211, -211, -210, -210, -210, -209,
    -209, -209, -209, -208, -208, -208, -207, -207, -207, -206,
    -206, -206, -206, -205, -205, -205, -204, -204, -204, -203,
    -203, -203, -202, -202, -202, -202, -201, -201, -201, -200,
    -200, -200, -199, -199, -199, -199, -198, -198, -198, -197,
    -197, -197, -196, -196, -196, -196, -195, -195, -195, -194,
    -194, -194, -193, -193, -193, -193, -192, -192, -192, -191,
    -191, -191, -190, -190, -190, -190, -189, -189, -189, -188,
    -188, -188, -187, -187, -187, -187, -186, -186, -186, -185,
    -185, -185, -184, -184, -184, -184, -183, -183, -183, -182,
    -182, -182, -181, -181, -181, -181, -180, -180, -180, -179,
    -179, -179, -178, -178, -178, -178, -177, -177, -177, -176,
    -176, -176, -175, -175, -175, -174, -174, -174, -174, -173,
    -173, -173, -172, -172, -172, -171, -171, -171, -171, -170,
    -170, -170, -169, -169, -169, -168, -168, -168, -168, -167,
    -167, -167, -166, -166, -166, -165, -165, -165, -165, -164,
    -164, -164, -163, -163, -163, -162, -162, -162, -162, -161,
    -161, -161, -160, -160, -160, -159, -159, -159, -159, -158,
    -158, -158, -157, -157, -157, -156, -156, -156, -156, -155,
    -155, -155, -154, -154, -154, -153, -153, -153, -153, -152,
    -152, -152, -151, -151, -151, -150, -150, -150, -150, -149,
    -149, -149, -148, -148, -148, -147, -147, -147, -146, -146,
    -146, -146, -145, -145, -145, -144, -144, -144, -143, -143,
    -143, -143, -142, -142, -142, -141, -141, -141, -140, -140,
    -140, -140, -139, -139, -139, -138, -138, -138, -137, -137,
    -137, -137, -136, -136, -136, -135, -135, -135, -134, -134,
    -134, -134, -133, -133, -133, -132, -132, -132, -131, -131,
    -131, -131, -130, -130, -130, -129, -129, -129, -128, -128,
    -128, -128, -127, -127, -127, -126, -126, -126, -125, -125,
    -125, -125, -124, -124, -124, -123, -123, -123, -122, -122,
    -122, -122, -121, -121, -121, -120, -120, -120, -119, -119,
    -119, -119, -118, -118, -118, -117, -117, -117, -116, -116,
    -116, -115, -115, -115, -115, -114, -114, -114, -113, -113,
    -113, -112, -112, -112, -112, -111, -111, -111, -110, -110,
    -110, -109, -109, -109, -109, -108, -108, -108, -107, -107,
    -107, -106, -106, -106, -106, -105, -105, -105, -104, -104,
    -104, -103, -103, -103, -103, -102, -102, -102, -101, -101,
    -101, -100, -100, -100, -100, -99, -99, -99, -98, -98,
    -98, -97, -97, -97, -97, -96, -96, -96, -95, -95,
    -95, -94, -94, -94, -94, -93, -93, -93, -92, -92,
    -92, -91, -91, -91, -91, -90, -90, -90, -89, -89,
    -89, -88, -88, -88, -87, -87, -87, -87, -86, -86,
    -86, -85, -85, -85, -84, -84, -84, -84, -83, -83,
    -83, -82, -82, -82, -81, -81, -81, -81, -80, -80,
    -80, -79, -79, -79, -78, -78, -78, -78, -77, -77,
    -77, -76, -76, -76, -75, -75, -75, -75, -74, -74,
    -74, -73, -73, -73, -72, -72, -72, -72, -71, -71,
    -71, -70, -70, -70, -69, -69, -69, -69, -68, -68,
    -68, -67, -67, -67, -66, -66, -66, -66, -65, -65,
    -65, -64, -64, -64, -63, -63, -63, -63, -62, -62,
    -62, -61, -61, -61, -60, -60, -60, -60, -59, -59,
    -59, -58, -58, -58, -57, -57, -57, -56, -56, -56,
    -56, -55, -55, -55, -54, -54, -54, -53, -53, -53,
    -53, -52, -52, -52, -51, -51, -51, -50, -50, -50,
    -50, -49, -49, -49, -48, -48, -48, -47, -47, -47,
    -47, -46, -46, -46, -45, -45, -45, -44, -44, -44,
    -44, -43, -43, -43, -42, -42, -42, -41, -41, -41,
    -41, -40, -40, -40, -39, -39, -39, -38, -38, -38,
    -38, -37, -37, -37, -36, -36, -36, -35, -35, -35,
    -35, -34, -34, -34, -33, -33, -33, -32, -32, -32,
    -32, -31, -31, -31, -30, -30, -30, -29, -29, -29,
    -28, -28, -28, -28, -27, -27, -27, -26, -26, -26,
    -25, -25, -25, -25, -24, -24, -24, -23, -23, -23,
    -22, -22, -22, -22, -21, -21, -21, -20, -20, -20,
    -19, -19, -19, -19, -18, -18, -18, -17, -17, -17,
    -16, -16, -16, -16, -15, -15, -15, -14, -14, -14,
    -13, -13, -13, -13, -12, -12, -12, -11, -11, -11,
    -10, -10, -10, -10, -9, -9, -9, -8, -8, -8,
    -7, -7, -7, -7, -6, -6, -6, -5, -5, -5,
    -4, -4, -4, -4, -3, -3, -3, -2, -2, -2,
    -1, -1, -1, 0, 0, 0, 0, 1, 1, 1,
    2, 2, 2, 3, 3, 3, 3, 4, 4, 4,
    5, 5, 5, 6, 6, 6, 6, 7, 7, 7,
    8, 8, 8, 9, 9, 9, 9, 10, 10, 10,
    11, 11, 11, 12, 12, 12, 12, 13, 13, 13,
    14, 14, 14, 15, 15, 15, 15, 16, 16, 16,
    17, 17, 17, 18, 18, 18, 18, 19, 19, 19,
    20, 20, 20, 21, 21, 21, 21, 22, 22, 22,
    23, 23, 23, 24, 24, 24, 24, 25, 25, 25,
    26, 26, 26, 27, 27, 27, 27, 28, 28, 28,
    29, 29, 29, 30, 30, 30, 31, 31, 31, 31,
    32, 32, 32, 33, 33, 33, 34, 34, 34, 34,
    35, 35, 35, 36, 36, 36, 37, 37, 37, 37,
    38, 38, 38, 39, 39, 39, 40, 40, 40, 40,
    41, 41, 41, 42, 42, 42, 43, 43, 43, 43,
    44, 44, 44, 45, 45, 45, 46, 46, 46, 46,
    47, 47, 47, 48, 48, 48, 49, 49, 49, 49,
    50, 50, 50, 51, 51, 51, 52, 52, 52, 52,
    53, 53, 53, 54, 54, 54, 55, 55, 55, 55,
    56, 56, 56, 57, 57, 57, 58, 58, 58, 59,
    59, 59, 59, 60, 60, 60, 61, 61, 61, 62,
    62, 62, 62, 63, 63, 63, 64, 64, 64, 65,
    65, 65, 65, 66, 66, 66, 67, 67, 67, 68,
    68, 68, 68, 69, 69, 69, 70, 70, 70, 71,
    71, 71, 71, 72, 72, 72, 73, 73, 73, 74,
    74, 74, 74, 75, 75, 75, 76, 76, 76, 77,
    77, 77, 77, 78, 78, 78, 79, 79, 79, 80,
    80, 80, 80, 81, 81, 81, 82, 82, 82, 83,
    83, 83, 83, 84, 84, 84, 85, 85, 85, 86,
    86, 86, 86, 87, 87, 87, 88, 88, 88, 89,
    89, 89, 90, 90, 90, 90, 91, 91, 91, 92,
    92, 92, 93, 93, 93, 93, 94, 94, 94, 95,
    95, 95, 96, 96, 96, 96, 97, 97, 97, 98,
    98, 98, 99, 99, 99, 99, 100, 100, 100, 101,
    101, 101, 102, 102, 102, 102, 103, 103, 103, 104,
    104, 104, 105, 105, 105, 105, 106, 106, 106, 107,
    107, 107, 108, 108, 108, 108, 109, 109, 109, 110,
    110, 110, 111, 111, 111, 111, 112, 112, 112, 113,
    113, 113, 114, 114, 114, 114, 115, 115, 115, 116,
    116, 116, 117, 117, 117, 118, 118, 118, 118, 119,
    119, 119, 120, 120, 120, 121, 121, 121, 121, 122,
    122, 122, 123, 123, 123, 124, 124, 124, 124, 125,
    125, 125, 126, 126, 126, 127, 127, 127, 127, 128,
    128, 128, 129, 129, 129, 130, 130, 130, 130, 131,
    131, 131, 132, 132, 132, 133, 133, 133, 133, 134,
    134, 134, 135, 135, 135, 136, 136, 136, 136, 137,
    137, 137, 138, 138, 138, 139, 139, 139, 139, 140,
    140, 140, 141, 141, 141, 142, 142, 142, 142, 143,
    143, 143, 144, 144, 144, 145, 145, 145, 145, 146,
    146, 146, 147, 147, 147, 148, 148, 148, 149, 149,
    149, 149, 150, 150, 150, 151, 151, 151, 152, 152,
    152, 152, 153, 153, 153, 154, 154, 154, 155, 155,
    155, 155, 156, 156, 156, 157, 157, 157, 158, 158,
    158, 158, 159, 159, 159, 160, 160, 160, 161, 161,
    161, 161, 162, 162, 162, 163, 163, 163, 164, 164,
    164, 164, 165, 165, 165, 166, 166, 166, 167, 167,
    167, 167, 168, 168, 168, 169, 169, 169, 170, 170,
    170, 170, 171, 171, 171, 172, 172, 172, 173, 173,
    173, 173, 174, 174, 174, 175, 175, 175, 176, 176,
    176, 177, 177, 177, 177, 178, 178, 178, 179, 179,
    179, 180, 180, 180, 180, 181, 181, 181, 182, 182,
    182, 183, 183, 183, 183, 184, 184, 184, 185, 185,
    185, 186, 186, 186, 186, 187, 187, 187, 188, 188,
    188, 189, 189, 189, 189, 190, 190, 190, 191, 191,
    191, 192, 192, 192, 192, 193, 193, 193, 194, 194,
    194, 195, 195, 195, 195, 196, 196, 196, 197, 197,
    197, 198, 198, 198, 198, 199, 199, 199, 200, 200,
    200, 201, 201, 201, 201, 202, 202, 202, 203, 203,
    203, 204, 204, 204, 205, 205, 205, 205, 206, 206,
    206, 207, 207, 207, 208, 208, 208, 208, 209, 209,
    209, 210, 210, 210, 211, 211, 211, 211, 212, 212,
    212, 213, 213, 213, 214, 214, 214, 214, 215, 215,
    215, 216, 216, 216, 217, 217, 217, 217, 218, 218,
    218, 219, 219, 219, 220, 220, 220, 220, 221, 221,
    221, 222, 222, 222, 223, 223, 223, 223, 224, 224,
    224, 225, 225, 225, 226, 226, 226, 226, 227, 227,
    227, 228, 228, 228, 229, 229, 229, 229, 230, 230,
    230, 231, 231, 231, 232, 232, 232, 232, 233, 233,
    233, 234, 234, 234, 235, 235, 235, 236, 236, 236,
    236, 237, 237, 237, 238, 238, 238, 239, 239, 239,
    239, 240, 240, 240, 241, 241, 241, 242, 242, 242,
    242, 243, 243, 243, 244, 244, 244, 245, 245, 245,
    245, 246, 246, 246, 247, 247, 247, 248, 248, 248,
    248, 249, 249, 249, 250, 250, 250, 251, 251, 251,
    251, 252, 252, 252, 253, 253, 253, 254, 254, 254,
    254, 255, 255, 255, 256, 256, 256, 257, 257, 257,
    257, 258, 258, 258, 259, 259, 259, 260, 260, 260,
    260, 261, 261, 261, 262, 262, 262, 263, 263, 263,
    264, 264, 264, 264, 265, 265, 265, 266, 266, 266,
    267, 267, 267, 267, 268, 268, 268, 269, 269, 269,
    270, 270, 270, 270, 271, 271, 271, 272, 272, 272,
    273, 273, 273, 273, 274, 274, 274, 275, 275, 275,
    276, 276, 276, 276, 277, 277, 277, 278, 278, 278,
    279, 279, 279, 279, 280, 280, 280, 281, 281, 281,
    282, 282, 282, 282, 283, 283, 283, 284, 284, 284,
    285, 285, 285, 285, 286, 286, 286, 287, 287, 287,
    288, 288, 288, 288, 289, 289, 289, 290, 290, 290,
    291, 291, 291, 291, 292, 292, 292, 293, 293, 293,
    294, 294, 294, 295, 295, 295, 295, 296, 296, 296,
    297, 297, 297, 298, 298, 298, 298, 299, 299, 299,
    300, 300, 300, 301, 301, 301, 301, 302, 302, 302,
    303, 303, 303, 304, 304, 304, 304, 305, 305, 305,
    306, 306, 306, 307, 307, 307, 307, 308,
];
